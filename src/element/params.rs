use crate::animation::ease::CubicBezier;
use crate::animation::interp::Lerp;
use crate::color::Color;
use crate::foundation::error::NeuResult;
use crate::style::param::Param;
use crate::style::resolver::{ConfigSource, NodeId, Resolver};

/// Everything the emboss renderer needs for one frame.
///
/// Fields interpolate independently; there are no cross-field invariants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualParams {
    /// Base surface color.
    pub color: Color,
    /// Text color used when the surface is light.
    pub text_color_light: Color,
    /// Text color used when the surface is dark.
    pub text_color_dark: Color,
    /// Extrusion height; negative recesses.
    pub height: f64,
    /// Gradient bias between the two surface tones.
    pub pressure: f64,
    /// Shadow/highlight divergence, clamped to `[0, 1]` when rendered.
    pub intensity: f64,
    /// Light direction in degrees.
    pub direction: f64,
}

impl Default for VisualParams {
    /// Built-in fallbacks of every [`Param`].
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            text_color_light: Color::BLACK,
            text_color_dark: Color::WHITE,
            height: 0.0,
            pressure: 0.0,
            intensity: 0.3,
            direction: 135.0,
        }
    }
}

impl VisualParams {
    /// Per-field interpolation toward `to`.
    ///
    /// `progress` is eased through `curve` (which clamps it), then scalars are
    /// lerped and colors pigment-blended.
    pub fn interpolate(&self, to: &Self, progress: f64, curve: &CubicBezier) -> Self {
        let t = curve.at(progress);
        Self {
            color: Lerp::lerp(&self.color, &to.color, t),
            text_color_light: Lerp::lerp(&self.text_color_light, &to.text_color_light, t),
            text_color_dark: Lerp::lerp(&self.text_color_dark, &to.text_color_dark, t),
            height: Lerp::lerp(&self.height, &to.height, t),
            pressure: Lerp::lerp(&self.pressure, &to.pressure, t),
            intensity: Lerp::lerp(&self.intensity, &to.intensity, t),
            direction: Lerp::lerp(&self.direction, &to.direction, t),
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.color.is_finite()
            && self.text_color_light.is_finite()
            && self.text_color_dark.is_finite()
            && [self.height, self.pressure, self.intensity, self.direction]
                .iter()
                .all(|v| v.is_finite())
    }
}

/// Caller-supplied construction values that take precedence over the cascade.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementOverrides {
    /// Base surface color.
    pub color: Option<Color>,
    /// Text color over light surfaces.
    pub text_color_light: Option<Color>,
    /// Text color over dark surfaces.
    pub text_color_dark: Option<Color>,
    /// Extrusion height.
    pub height: Option<f64>,
    /// Gradient bias.
    pub pressure: Option<f64>,
    /// Shadow/highlight divergence.
    pub intensity: Option<f64>,
    /// Light direction in degrees.
    pub direction: Option<f64>,
}

/// Resolve an element's resting parameters.
///
/// Overrides win; anything else goes through the attribute cascade with the
/// built-in fallbacks. Malformed configuration text is an error.
pub fn resolve_defaults<C>(
    source: &C,
    node: NodeId,
    overrides: &ElementOverrides,
) -> NeuResult<VisualParams>
where
    C: ConfigSource + ?Sized,
{
    let r = Resolver::new(source, node);

    let params = VisualParams {
        color: or_resolve(overrides.color, || r.color(Param::Background))?,
        text_color_light: or_resolve(overrides.text_color_light, || r.color(Param::TextLight))?,
        text_color_dark: or_resolve(overrides.text_color_dark, || r.color(Param::TextDark))?,
        height: or_resolve(overrides.height, || r.number(Param::Height))?,
        pressure: or_resolve(overrides.pressure, || r.number(Param::Pressure))?,
        intensity: or_resolve(overrides.intensity, || r.number(Param::Intensity))?,
        direction: or_resolve(overrides.direction, || r.angle(Param::Direction))?,
    };

    tracing::debug!(
        node = %node,
        color = %params.color,
        height = params.height,
        pressure = params.pressure,
        intensity = params.intensity,
        direction = params.direction,
        "resolved element defaults"
    );
    Ok(params)
}

fn or_resolve<T>(value: Option<T>, resolve: impl FnOnce() -> NeuResult<T>) -> NeuResult<T> {
    match value {
        Some(v) => Ok(v),
        None => resolve(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/element/params.rs"]
mod tests;
