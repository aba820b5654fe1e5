use crate::foundation::error::{NeuError, NeuResult};

/// Solver precision for both the Newton and bisection phases.
const EPSILON: f64 = 1e-6;
const NEWTON_ITERATIONS: usize = 8;
// An f64 interval collapses well before this.
const MAX_BISECTIONS: usize = 64;

/// Cubic Bézier timing curve with endpoints fixed at `(0, 0)` and `(1, 1)`.
///
/// Polynomial coefficients are precomputed from the two interior control
/// points; evaluation is stateless.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl CubicBezier {
    /// Build a curve from control points `(p1x, p1y)` and `(p2x, p2y)` without validation.
    pub const fn new(p1x: f64, p1y: f64, p2x: f64, p2y: f64) -> Self {
        let cx = 3.0 * p1x;
        let bx = 3.0 * (p2x - p1x) - cx;
        let ax = 1.0 - cx - bx;

        let cy = 3.0 * p1y;
        let by = 3.0 * (p2y - p1y) - cy;
        let ay = 1.0 - cy - by;

        Self {
            ax,
            bx,
            cx,
            ay,
            by,
            cy,
        }
    }

    /// Build a curve, rejecting non-finite values and x control points outside `[0, 1]`.
    pub fn try_new(p1x: f64, p1y: f64, p2x: f64, p2y: f64) -> NeuResult<Self> {
        if ![p1x, p1y, p2x, p2y].iter().all(|v| v.is_finite()) {
            return Err(NeuError::validation(
                "cubic-bezier control points must be finite",
            ));
        }
        if !(0.0..=1.0).contains(&p1x) || !(0.0..=1.0).contains(&p2x) {
            return Err(NeuError::validation(
                "cubic-bezier x control points must be in [0, 1]",
            ));
        }
        Ok(Self::new(p1x, p1y, p2x, p2y))
    }

    fn sample_x(&self, t: f64) -> f64 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn sample_y(&self, t: f64) -> f64 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn sample_dx(&self, t: f64) -> f64 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Find the curve parameter whose x-coordinate is `x`.
    ///
    /// Newton's method first; bisection when it stalls. Never fails: the last
    /// estimate is returned if neither phase converges.
    fn solve_x(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = self.sample_x(t) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let d = self.sample_dx(t);
            if d.abs() < EPSILON {
                break;
            }
            t -= err / d;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        let mut t = x;
        if t < lo {
            return lo;
        }
        if t > hi {
            return hi;
        }

        for _ in 0..MAX_BISECTIONS {
            if lo >= hi {
                break;
            }
            let sx = self.sample_x(t);
            if (sx - x).abs() < EPSILON {
                return t;
            }
            if x > sx {
                lo = t;
            } else {
                hi = t;
            }
            t = (hi - lo) * 0.5 + lo;
        }

        t
    }

    /// Map elapsed-time fraction `x` to progress along the curve.
    ///
    /// `x` is clamped to `[0, 1]` before solving; both ends map to themselves exactly.
    pub fn at(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        self.sample_y(self.solve_x(x))
    }
}

/// Named timing curves (CSS `transition-timing-function` keywords).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    /// `cubic-bezier(0, 0, 1, 1)`.
    Linear,
    /// `cubic-bezier(0.25, 0.1, 0.25, 1)`.
    Ease,
    /// `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`, the engine default.
    #[default]
    EaseInOut,
}

impl Ease {
    /// Control-point curve for this keyword.
    pub const fn curve(self) -> CubicBezier {
        match self {
            Self::Linear => CubicBezier::new(0.0, 0.0, 1.0, 1.0),
            Self::Ease => CubicBezier::new(0.25, 0.1, 0.25, 1.0),
            Self::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0),
        }
    }

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        self.curve().at(t)
    }
}

impl From<Ease> for CubicBezier {
    fn from(ease: Ease) -> Self {
        ease.curve()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
