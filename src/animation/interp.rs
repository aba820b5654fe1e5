use crate::color::Color;
use crate::foundation::math;

/// Types that can be interpolated by a normalized factor.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with `t` clamped to `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        math::lerp(*a, *b, t)
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.blend(*b, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
