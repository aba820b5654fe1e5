use std::collections::BTreeSet;

/// Token for one outstanding frame request.
///
/// Handed out by [`FrameScheduler::request_frame`] and consumed by
/// [`FrameScheduler::cancel_frame`]; the requester owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(pub u64);

/// Source of "next display refresh" callbacks.
///
/// Each request fires at most once, with a monotonically increasing timestamp.
/// A cancelled request never fires.
pub trait FrameScheduler {
    /// Ask for one callback on the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a pending request. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Deterministic in-memory scheduler.
///
/// Requests accumulate until [`FrameQueue::take_due`] drains them; requests
/// made while a batch is being dispatched land in the next batch.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next: u64,
    pending: BTreeSet<FrameHandle>,
}

impl FrameQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every outstanding request in issue order.
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }

    /// `true` when `handle` is requested and not yet fired or cancelled.
    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }

    /// Number of outstanding requests.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// `true` when nothing is waiting for a frame.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending.insert(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.remove(&handle);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
