pub(crate) fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let t = clamp01(t);
    a + (b - a) * t
}

pub(crate) fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = clamp01((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

// sRGB transfer functions (IEC 61966-2-1), normalized channels.
pub(crate) fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub(crate) fn linear_to_srgb(l: f64) -> f64 {
    if l <= 0.003_130_8 {
        12.92 * l
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
