//! Headless frame loop that owns a set of elements and their scheduler.
//!
//! `Stage` plays the role of the display: it hands out frame handles through
//! its [`FrameQueue`] and, on each [`Stage::tick`], delivers every due frame to
//! the element that requested it.

use crate::animation::scheduler::{FrameHandle, FrameQueue, FrameScheduler};
use crate::element::params::{ElementOverrides, VisualParams};
use crate::element::pressure::{PressureSensitiveElement, oscillate};
use crate::element::request::AnimationRequest;
use crate::foundation::error::NeuResult;
use crate::render::surface::Surface;
use crate::style::resolver::{ConfigSource, NodeId};

/// Index of an element inside a [`Stage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementKey(usize);

/// Elements plus the frame queue driving them.
pub struct Stage<S> {
    queue: FrameQueue,
    elements: Vec<PressureSensitiveElement<S>>,
    last_tick_ms: Option<f64>,
}

impl<S> Default for Stage<S> {
    fn default() -> Self {
        Self {
            queue: FrameQueue::new(),
            elements: Vec::new(),
            last_tick_ms: None,
        }
    }
}

impl<S: Surface> Stage<S> {
    /// Create an empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve and add an element for `node`.
    pub fn insert<C>(
        &mut self,
        source: &C,
        node: NodeId,
        overrides: &ElementOverrides,
        surface: S,
    ) -> NeuResult<ElementKey>
    where
        C: ConfigSource + ?Sized,
    {
        let element =
            PressureSensitiveElement::new(source, node, overrides, surface, &mut self.queue)?;
        Ok(self.push(element))
    }

    /// Add an element with pre-resolved defaults.
    pub fn insert_defaults(
        &mut self,
        node: NodeId,
        defaults: VisualParams,
        surface: S,
    ) -> ElementKey {
        let element =
            PressureSensitiveElement::from_defaults(node, defaults, surface, &mut self.queue);
        self.push(element)
    }

    fn push(&mut self, element: PressureSensitiveElement<S>) -> ElementKey {
        self.elements.push(element);
        ElementKey(self.elements.len() - 1)
    }

    /// Borrow an element.
    pub fn element(&self, key: ElementKey) -> Option<&PressureSensitiveElement<S>> {
        self.elements.get(key.0)
    }

    /// Mutably borrow an element together with the scheduler it must use.
    pub fn element_mut(
        &mut self,
        key: ElementKey,
    ) -> Option<(&mut PressureSensitiveElement<S>, &mut dyn FrameScheduler)> {
        let element = self.elements.get_mut(key.0)?;
        Some((element, &mut self.queue))
    }

    /// Start an animation on one element. `None` for an unknown key.
    pub fn animate(&mut self, key: ElementKey, request: &AnimationRequest) -> Option<FrameHandle> {
        let (element, queue) = self.element_mut(key)?;
        Some(element.animate(request, queue))
    }

    /// Start an animation with a completion callback.
    pub fn animate_with<F>(
        &mut self,
        key: ElementKey,
        request: &AnimationRequest,
        on_complete: F,
    ) -> Option<FrameHandle>
    where
        F: FnOnce(&mut PressureSensitiveElement<S>, &mut dyn FrameScheduler) + 'static,
    {
        let (element, queue) = self.element_mut(key)?;
        Some(element.animate_with(request, queue, on_complete))
    }

    /// Cancel one element's animation.
    pub fn cancel(&mut self, key: ElementKey) {
        if let Some((element, queue)) = self.element_mut(key) {
            element.cancel(queue);
        }
    }

    /// Deliver every due frame at `timestamp_ms`. Returns how many elements advanced.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn tick(&mut self, timestamp_ms: f64) -> usize {
        if let Some(last) = self.last_tick_ms {
            if timestamp_ms < last {
                tracing::warn!(last, timestamp_ms, "frame timestamp went backwards");
            }
        }
        self.last_tick_ms = Some(timestamp_ms);

        let mut advanced = 0;
        for handle in self.queue.take_due() {
            let owner = self
                .elements
                .iter_mut()
                .find(|e| e.pending_frame() == Some(handle));
            match owner {
                Some(element) => {
                    if element.on_frame(handle, timestamp_ms, &mut self.queue) {
                        advanced += 1;
                    }
                }
                None => tracing::trace!(handle = handle.0, "no owner for frame"),
            }
        }
        advanced
    }

    /// Tick at a fixed interval from `start_ms` until nothing is pending or
    /// `max_frames` ticks have run. Returns the number of ticks.
    pub fn run_until_idle(&mut self, start_ms: f64, interval_ms: f64, max_frames: usize) -> usize {
        let mut ticks = 0;
        while !self.is_idle() && ticks < max_frames {
            self.tick(start_ms + interval_ms * ticks as f64);
            ticks += 1;
        }
        if !self.is_idle() {
            tracing::debug!(ticks, pending = self.queue.pending_count(), "frame cap reached");
        }
        ticks
    }
}

impl<S: Surface + 'static> Stage<S> {
    /// Ping-pong one element between two requests; see [`oscillate`].
    pub fn oscillate(
        &mut self,
        key: ElementKey,
        first: AnimationRequest,
        second: AnimationRequest,
        phases: usize,
    ) {
        if let Some((element, queue)) = self.element_mut(key) {
            oscillate(element, first, second, phases, queue);
        }
    }
}

impl<S> Stage<S> {
    /// `true` when no element is waiting for a frame.
    pub fn is_idle(&self) -> bool {
        self.queue.is_idle()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` when the stage has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate elements with their keys, in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementKey, &PressureSensitiveElement<S>)> {
        self.elements.iter().enumerate().map(|(i, e)| (ElementKey(i), e))
    }
}

#[cfg(test)]
#[path = "../tests/unit/stage.rs"]
mod tests;
