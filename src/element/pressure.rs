use crate::animation::ease::CubicBezier;
use crate::animation::scheduler::{FrameHandle, FrameScheduler};
use crate::element::params::{ElementOverrides, VisualParams, resolve_defaults};
use crate::element::request::AnimationRequest;
use crate::foundation::error::NeuResult;
use crate::render::emboss;
use crate::render::surface::Surface;
use crate::style::resolver::{ConfigSource, NodeId};

/// Callback run once when an animation reaches its target.
///
/// It receives the element and the scheduler, so it may start the next
/// animation itself.
pub type Completion<S> =
    Box<dyn FnOnce(&mut PressureSensitiveElement<S>, &mut dyn FrameScheduler)>;

/// Whether an element is waiting on a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// No frame is scheduled.
    Idle,
    /// A frame is scheduled and `current` is moving toward a target.
    Animating,
}

struct ActiveAnimation<S> {
    handle: FrameHandle,
    from: VisualParams,
    to: VisualParams,
    duration_ms: f64,
    curve: CubicBezier,
    start_ms: Option<f64>,
    on_complete: Option<Completion<S>>,
}

/// Per-element animation state machine.
///
/// Holds the element's resting parameters (`defaults`, fixed at
/// construction), the last rendered parameters (`current`), and at most one
/// in-flight animation. Every frame recomputes the emboss paint and hands it
/// to the surface.
///
/// Starting a new animation cancels the previous one: its frame handle is
/// withdrawn and its completion callback is dropped unrun. The new animation
/// starts from `current`, wherever the old one left it.
pub struct PressureSensitiveElement<S> {
    node: NodeId,
    defaults: VisualParams,
    current: VisualParams,
    active: Option<ActiveAnimation<S>>,
    surface: S,
    frames_rendered: u64,
}

impl<S: Surface> PressureSensitiveElement<S> {
    /// Resolve `node`'s defaults from `source` and schedule the initial snap frame.
    ///
    /// Explicit `overrides` take precedence over the cascade. Malformed
    /// configuration values fail here, never later.
    #[tracing::instrument(level = "debug", skip(source, overrides, surface, scheduler))]
    pub fn new<C>(
        source: &C,
        node: NodeId,
        overrides: &ElementOverrides,
        surface: S,
        scheduler: &mut dyn FrameScheduler,
    ) -> NeuResult<Self>
    where
        C: ConfigSource + ?Sized,
    {
        let defaults = resolve_defaults(source, node, overrides)?;
        Ok(Self::from_defaults(node, defaults, surface, scheduler))
    }

    /// Build an element from already-resolved defaults.
    ///
    /// Like [`PressureSensitiveElement::new`], issues a zero-duration animation
    /// so the first frame renders the defaults.
    pub fn from_defaults(
        node: NodeId,
        defaults: VisualParams,
        surface: S,
        scheduler: &mut dyn FrameScheduler,
    ) -> Self {
        let mut element = Self {
            node,
            defaults,
            current: defaults,
            active: None,
            surface,
            frames_rendered: 0,
        };
        element.animate(&AnimationRequest::snap_to(&defaults), scheduler);
        element
    }

    /// Start animating toward `request`, preempting any running animation.
    pub fn animate(
        &mut self,
        request: &AnimationRequest,
        scheduler: &mut dyn FrameScheduler,
    ) -> FrameHandle {
        self.start(request, scheduler, None)
    }

    /// [`PressureSensitiveElement::animate`] with a completion callback.
    ///
    /// The callback runs once, after the final frame is painted. It never runs
    /// if the animation is preempted or cancelled.
    pub fn animate_with<F>(
        &mut self,
        request: &AnimationRequest,
        scheduler: &mut dyn FrameScheduler,
        on_complete: F,
    ) -> FrameHandle
    where
        F: FnOnce(&mut Self, &mut dyn FrameScheduler) + 'static,
    {
        self.start(request, scheduler, Some(Box::new(on_complete)))
    }

    fn start(
        &mut self,
        request: &AnimationRequest,
        scheduler: &mut dyn FrameScheduler,
        on_complete: Option<Completion<S>>,
    ) -> FrameHandle {
        if let Some(prev) = self.active.take() {
            scheduler.cancel_frame(prev.handle);
            tracing::debug!(
                node = %self.node,
                handle = prev.handle.0,
                "preempted running animation"
            );
        }

        let to = request.targets(&self.defaults, &self.current);
        let handle = scheduler.request_frame();
        self.active = Some(ActiveAnimation {
            handle,
            from: self.current,
            to,
            duration_ms: request.duration_ms(),
            curve: request.ease.curve(),
            start_ms: None,
            on_complete,
        });
        handle
    }

    /// Advance the animation owning `handle` to `timestamp_ms`.
    ///
    /// Returns `false` (and does nothing) when `handle` is not this element's
    /// live frame, e.g. it belongs to a preempted animation.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        timestamp_ms: f64,
        scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        let Some(active) = self.active.as_mut().filter(|a| a.handle == handle) else {
            tracing::trace!(node = %self.node, handle = handle.0, "ignoring stale frame");
            return false;
        };

        let start = *active.start_ms.get_or_insert(timestamp_ms);
        let progress = if active.duration_ms == 0.0 {
            1.0
        } else {
            (timestamp_ms - start) / active.duration_ms
        };

        self.current = active.from.interpolate(&active.to, progress, &active.curve);
        self.surface.paint(&emboss::render(&self.current));
        self.frames_rendered += 1;

        if progress < 1.0 {
            active.handle = scheduler.request_frame();
            return true;
        }

        let finished = self.active.take();
        tracing::trace!(node = %self.node, frames = self.frames_rendered, "animation complete");
        if let Some(on_complete) = finished.and_then(|a| a.on_complete) {
            on_complete(self, scheduler);
        }
        true
    }

    /// Stop the running animation where it is. The completion callback is dropped.
    pub fn cancel(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(prev) = self.active.take() {
            scheduler.cancel_frame(prev.handle);
            tracing::debug!(node = %self.node, handle = prev.handle.0, "cancelled animation");
        }
    }
}

impl<S> PressureSensitiveElement<S> {
    /// Configuration node this element was resolved from.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Resting parameters resolved at construction.
    pub fn defaults(&self) -> &VisualParams {
        &self.defaults
    }

    /// Parameters of the last rendered frame.
    pub fn current(&self) -> &VisualParams {
        &self.current
    }

    /// Current state of the state machine.
    pub fn state(&self) -> AnimationState {
        if self.active.is_some() {
            AnimationState::Animating
        } else {
            AnimationState::Idle
        }
    }

    /// The live frame handle, if animating.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.active.as_ref().map(|a| a.handle)
    }

    /// Number of frames painted since construction.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Borrow the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutably borrow the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the element and return its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S> std::fmt::Debug for PressureSensitiveElement<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PressureSensitiveElement")
            .field("node", &self.node)
            .field("defaults", &self.defaults)
            .field("current", &self.current)
            .field("pending_frame", &self.pending_frame())
            .field("frames_rendered", &self.frames_rendered)
            .finish_non_exhaustive()
    }
}

/// Ping-pong between `first` and `second`, chaining each animation from the
/// previous one's completion, for `phases` animations in total.
///
/// `phases == 0` does nothing. Preempting the element stops the chain.
pub fn oscillate<S: Surface + 'static>(
    element: &mut PressureSensitiveElement<S>,
    first: AnimationRequest,
    second: AnimationRequest,
    phases: usize,
    scheduler: &mut dyn FrameScheduler,
) {
    fn step<S: Surface + 'static>(
        element: &mut PressureSensitiveElement<S>,
        requests: [AnimationRequest; 2],
        index: usize,
        remaining: usize,
        scheduler: &mut dyn FrameScheduler,
    ) {
        if remaining == 0 {
            return;
        }
        let request = requests[index % 2];
        element.animate_with(&request, scheduler, move |el, sched| {
            step(el, requests, index + 1, remaining - 1, sched);
        });
    }

    step(element, [first, second], 0, phases, scheduler);
}

#[cfg(test)]
#[path = "../../tests/unit/element/pressure.rs"]
mod tests;
