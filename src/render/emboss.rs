use std::fmt::Write as _;

use kurbo::Vec2;

use crate::color::Color;
use crate::element::params::VisualParams;

/// Two-stop linear gradient painted across the surface.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LinearGradient {
    /// Gradient line angle in radians.
    pub angle_rad: f64,
    /// Start color (upper tone).
    pub from: Color,
    /// End color (lower tone).
    pub to: Color,
}

/// One drop or inset shadow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BoxShadow {
    /// Shadow offset in pixels.
    pub offset: Vec2,
    /// Blur radius in pixels.
    pub blur: f64,
    /// Shadow color.
    pub color: Color,
    /// Drawn inside the surface (recessed) rather than outside.
    pub inset: bool,
}

/// Derived paint for one frame: surface gradient, the shadow/highlight pair,
/// and the contrasting text color.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SurfacePaint {
    /// Surface gradient.
    pub gradient: LinearGradient,
    /// `[shadow, highlight]`, mirrored across the surface.
    pub shadows: [BoxShadow; 2],
    /// Foreground text color.
    pub text_color: Color,
}

/// Compute the emboss paint for `params`.
///
/// Pure function of its input. Non-finite parameters are a caller bug.
pub fn render(params: &VisualParams) -> SurfacePaint {
    debug_assert!(params.is_finite(), "non-finite visual params: {params:?}");

    let direction = params.direction.to_radians();
    let intensity = params.intensity.clamp(0.0, 1.0);

    let raised = params.height >= 0.0;
    let distance = params.height.abs();
    let blur = distance * 2.0;

    let shadow = params.color.brighten(-intensity);
    let highlight = params.color.brighten(intensity);
    let upper = params.color.brighten(-params.pressure);
    let lower = params.color.brighten(params.pressure);

    let light = direction - std::f64::consts::FRAC_PI_2;
    let offset = Vec2::new(light.sin() * distance, light.cos() * distance);

    let text_color = if upper.blend(lower, 0.5).is_light() {
        params.text_color_light
    } else {
        params.text_color_dark
    };

    SurfacePaint {
        gradient: LinearGradient {
            angle_rad: direction,
            from: upper,
            to: lower,
        },
        shadows: [
            BoxShadow {
                offset,
                blur,
                color: shadow,
                inset: !raised,
            },
            BoxShadow {
                offset: -offset,
                blur,
                color: highlight,
                inset: !raised,
            },
        ],
        text_color,
    }
}

impl SurfacePaint {
    /// `background-image` value, e.g. `linear-gradient(2.3562rad, #ffffff, #ffffff)`.
    pub fn background_image_css(&self) -> String {
        let g = &self.gradient;
        format!(
            "linear-gradient({}rad, {}, {})",
            css_number(g.angle_rad),
            g.from,
            g.to
        )
    }

    /// `box-shadow` value with both shadows.
    pub fn box_shadow_css(&self) -> String {
        let mut out = String::new();
        for (i, s) in self.shadows.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if s.inset {
                out.push_str("inset ");
            }
            let _ = write!(
                out,
                "{}px {}px {}px {}",
                css_number(s.offset.x),
                css_number(s.offset.y),
                css_number(s.blur),
                s.color
            );
        }
        out
    }

    /// Property/value pairs in application order.
    pub fn css_declarations(&self) -> [(&'static str, String); 3] {
        [
            ("background-image", self.background_image_css()),
            ("box-shadow", self.box_shadow_css()),
            ("color", self.text_color.to_hex()),
        ]
    }

    /// Inline style text: `background-image: ...; box-shadow: ...; color: ...;`.
    pub fn to_css(&self) -> String {
        self.css_declarations()
            .iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Shortest decimal text with at most four fractional digits.
fn css_number(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

#[cfg(test)]
#[path = "../../tests/unit/render/emboss.rs"]
mod tests;
