//! Paint-like color mixing.
//!
//! Colors are lifted into a coarse reflectance spectrum and mixed with the
//! Kubelka-Munk single-constant model, so complementary hues go through the
//! tones real pigments produce (blue and yellow make green, not grey).
//!
//! Each color becomes a latent pair: per-band absorption/scattering ratios plus
//! the RGB residual the spectral round trip cannot represent. Mixing
//! interpolates both and projects back. Results are whole 8-bit channel
//! values, and `t = 0`, `t = 1` and identical inputs return an input
//! unchanged.

use std::sync::OnceLock;

use crate::color::rgb::Color;
use crate::foundation::math::{clamp01, linear_to_srgb, smoothstep, srgb_to_linear};

/// Number of spectral bands, ordered from short (blue) to long (red) wavelengths.
const BANDS: usize = 16;

/// Lowest reflectance a band may hold; keeps K/S finite and stops pure black
/// from absorbing every other pigment.
const MIN_REFLECTANCE: f64 = 0.02;

/// Added to luminance when weighting concentrations so dark pigments still tint.
const TINT_FLOOR: f64 = 0.05;

struct Basis {
    red: [f64; BANDS],
    green: [f64; BANDS],
    blue: [f64; BANDS],
}

impl Basis {
    fn build() -> Self {
        let mut basis = Self {
            red: [0.0; BANDS],
            green: [0.0; BANDS],
            blue: [0.0; BANDS],
        };
        for k in 0..BANDS {
            let s = k as f64 / (BANDS - 1) as f64;
            basis.blue[k] = 1.0 - smoothstep(0.30, 0.55, s);
            basis.green[k] = smoothstep(0.25, 0.45, s) * (1.0 - smoothstep(0.55, 0.75, s));
            basis.red[k] = smoothstep(0.50, 0.75, s);
        }
        basis
    }

    fn observers(&self) -> [&[f64; BANDS]; 3] {
        [&self.red, &self.green, &self.blue]
    }
}

fn basis() -> &'static Basis {
    static BASIS: OnceLock<Basis> = OnceLock::new();
    BASIS.get_or_init(Basis::build)
}

#[derive(Clone, Copy, Debug)]
struct Latent {
    ks: [f64; BANDS],
    residual: [f64; 3],
    luminance: f64,
}

impl Latent {
    fn from_color(color: Color) -> Self {
        let linear = color
            .channels()
            .map(|c| srgb_to_linear(clamp01(c / 255.0)));
        let reflectance = upsample(linear);
        let projected = project(&reflectance);

        Self {
            ks: reflectance.map(ks_from_reflectance),
            residual: [
                linear[0] - projected[0],
                linear[1] - projected[1],
                linear[2] - projected[2],
            ],
            luminance: 0.2126 * linear[0] + 0.7152 * linear[1] + 0.0722 * linear[2],
        }
    }

    fn mix_to_color(&self, other: &Self, t: f64) -> Color {
        let t = clamp01(t);

        let [wa, wb] = concentrations(self.luminance, other.luminance, t);

        let mut reflectance = [0.0; BANDS];
        for (k, r) in reflectance.iter_mut().enumerate() {
            *r = reflectance_from_ks(self.ks[k] * wa + other.ks[k] * wb);
        }

        let projected = project(&reflectance);
        let channel = |i: usize| {
            let residual = self.residual[i] + (other.residual[i] - self.residual[i]) * t;
            let linear = clamp01(projected[i] + residual);
            (linear_to_srgb(linear) * 255.0).round().clamp(0.0, 255.0)
        };
        Color::rgb(channel(0), channel(1), channel(2))
    }
}

/// Normalized pigment concentrations `[wa, wb]` for mix factor `t`.
///
/// Each side's weight is its squared share of the mix scaled by tinting
/// strength (`luminance + TINT_FLOOR`), so a dark pigment needs a larger share
/// than a light one to dominate. The pair always sums to 1.
fn concentrations(luminance_a: f64, luminance_b: f64, t: f64) -> [f64; 2] {
    let wa = (1.0 - t) * (1.0 - t) * (luminance_a + TINT_FLOOR);
    let wb = t * t * (luminance_b + TINT_FLOOR);
    let total = wa + wb;
    [wa / total, wb / total]
}

/// Mix `a` toward `b` by `t` (clamped to `[0, 1]`).
///
/// Interior results are rounded to whole channel values. The endpoints and
/// `a == b` return an input as is.
pub fn mix(a: Color, b: Color, t: f64) -> Color {
    let t = clamp01(t);
    if t <= 0.0 || a == b {
        return a;
    }
    if t >= 1.0 {
        return b;
    }
    Latent::from_color(a).mix_to_color(&Latent::from_color(b), t)
}

fn upsample(linear: [f64; 3]) -> [f64; BANDS] {
    let b = basis();
    let [r, g, bl] = linear;
    let w = r.min(g).min(bl);

    let mut out = [0.0; BANDS];
    for (k, v) in out.iter_mut().enumerate() {
        let rho = w + (r - w) * b.red[k] + (g - w) * b.green[k] + (bl - w) * b.blue[k];
        *v = rho.clamp(MIN_REFLECTANCE, 1.0);
    }
    out
}

fn project(reflectance: &[f64; BANDS]) -> [f64; 3] {
    basis().observers().map(|obs| {
        let weight: f64 = obs.iter().sum();
        let lit: f64 = obs.iter().zip(reflectance).map(|(o, r)| o * r).sum();
        lit / weight
    })
}

fn ks_from_reflectance(r: f64) -> f64 {
    (1.0 - r) * (1.0 - r) / (2.0 * r)
}

fn reflectance_from_ks(ks: f64) -> f64 {
    1.0 + ks - (ks * ks + 2.0 * ks).sqrt()
}

#[cfg(test)]
#[path = "../../tests/unit/color/pigment.rs"]
mod tests;
