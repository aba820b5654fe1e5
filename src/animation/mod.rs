//! Timing primitives: the cubic-Bézier easing solver, interpolation and frame scheduling.

pub(crate) mod ease;
pub(crate) mod interp;
pub(crate) mod scheduler;
