use crate::animation::ease::Ease;
use crate::color::Color;
use crate::element::params::VisualParams;

/// Where one field should end up when an animation completes.
///
/// `UseDefault` and `Freeze` are distinct: the first returns to the element's
/// resolved default, the second holds whatever value is current when the
/// request starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Target<T> {
    /// Animate to this value.
    Explicit(T),
    /// Animate back to the element's resting value.
    UseDefault,
    /// Keep the value the element has when the request starts.
    Freeze,
}

impl<T> Default for Target<T> {
    fn default() -> Self {
        Self::UseDefault
    }
}

impl<T> From<T> for Target<T> {
    fn from(value: T) -> Self {
        Self::Explicit(value)
    }
}

impl<T> Target<T> {
    /// Pick the end value given the element's default and current values.
    pub fn resolve(self, default: T, current: T) -> T {
        match self {
            Self::Explicit(v) => v,
            Self::UseDefault => default,
            Self::Freeze => current,
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "lowercase")]
enum TargetKeyword {
    Default,
    Freeze,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum TargetRepr<T> {
    Keyword(TargetKeyword),
    Value(T),
}

impl<T> serde::Serialize for Target<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Explicit(v) => v.serialize(serializer),
            Self::UseDefault => serializer.serialize_str("default"),
            Self::Freeze => serializer.serialize_str("freeze"),
        }
    }
}

impl<'de, T> serde::Deserialize<'de> for Target<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match TargetRepr::<T>::deserialize(deserializer)? {
            TargetRepr::Keyword(TargetKeyword::Default) => Self::UseDefault,
            TargetRepr::Keyword(TargetKeyword::Freeze) => Self::Freeze,
            TargetRepr::Value(v) => Self::Explicit(v),
        })
    }
}

/// One `animate` call: per-field targets, a duration and an easing curve.
///
/// Omitted fields animate back to the element's defaults. The completion
/// callback is passed separately to
/// [`PressureSensitiveElement::animate_with`](crate::PressureSensitiveElement::animate_with).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationRequest {
    /// Base surface color.
    pub color: Target<Color>,
    /// Text color over light surfaces.
    pub text_color_light: Target<Color>,
    /// Text color over dark surfaces.
    pub text_color_dark: Target<Color>,
    /// Extrusion height.
    pub height: Target<f64>,
    /// Gradient bias.
    pub pressure: Target<f64>,
    /// Shadow/highlight divergence.
    pub intensity: Target<f64>,
    /// Light direction in degrees.
    pub direction: Target<f64>,
    /// Length of the transition in milliseconds.
    pub duration: f64,
    /// Timing curve.
    pub ease: Ease,
}

impl AnimationRequest {
    /// A request that returns every field to its default instantly.
    pub fn new() -> Self {
        Self::default()
    }

    /// A request that holds every field at its current value.
    pub fn frozen() -> Self {
        Self {
            color: Target::Freeze,
            text_color_light: Target::Freeze,
            text_color_dark: Target::Freeze,
            height: Target::Freeze,
            pressure: Target::Freeze,
            intensity: Target::Freeze,
            direction: Target::Freeze,
            ..Self::default()
        }
    }

    /// A request that snaps to exactly `params`.
    pub fn snap_to(params: &VisualParams) -> Self {
        Self {
            color: params.color.into(),
            text_color_light: params.text_color_light.into(),
            text_color_dark: params.text_color_dark.into(),
            height: params.height.into(),
            pressure: params.pressure.into(),
            intensity: params.intensity.into(),
            direction: params.direction.into(),
            ..Self::default()
        }
    }

    /// Set the color target.
    pub fn color(mut self, target: impl Into<Target<Color>>) -> Self {
        self.color = target.into();
        self
    }

    /// Set the light-surface text color target.
    pub fn text_color_light(mut self, target: impl Into<Target<Color>>) -> Self {
        self.text_color_light = target.into();
        self
    }

    /// Set the dark-surface text color target.
    pub fn text_color_dark(mut self, target: impl Into<Target<Color>>) -> Self {
        self.text_color_dark = target.into();
        self
    }

    /// Set the height target.
    pub fn height(mut self, target: impl Into<Target<f64>>) -> Self {
        self.height = target.into();
        self
    }

    /// Set the pressure target.
    pub fn pressure(mut self, target: impl Into<Target<f64>>) -> Self {
        self.pressure = target.into();
        self
    }

    /// Set the intensity target.
    pub fn intensity(mut self, target: impl Into<Target<f64>>) -> Self {
        self.intensity = target.into();
        self
    }

    /// Set the direction target.
    pub fn direction(mut self, target: impl Into<Target<f64>>) -> Self {
        self.direction = target.into();
        self
    }

    /// Set the duration in milliseconds.
    pub fn duration(mut self, ms: f64) -> Self {
        self.duration = ms;
        self
    }

    /// Set the timing curve.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Duration with negative and non-finite values coerced to `0`.
    pub fn duration_ms(&self) -> f64 {
        if self.duration.is_finite() && self.duration > 0.0 {
            self.duration
        } else {
            0.0
        }
    }

    /// End values for this request.
    pub fn targets(&self, defaults: &VisualParams, current: &VisualParams) -> VisualParams {
        VisualParams {
            color: self.color.resolve(defaults.color, current.color),
            text_color_light: self
                .text_color_light
                .resolve(defaults.text_color_light, current.text_color_light),
            text_color_dark: self
                .text_color_dark
                .resolve(defaults.text_color_dark, current.text_color_dark),
            height: self.height.resolve(defaults.height, current.height),
            pressure: self.pressure.resolve(defaults.pressure, current.pressure),
            intensity: self.intensity.resolve(defaults.intensity, current.intensity),
            direction: self.direction.resolve(defaults.direction, current.direction),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/element/request.rs"]
mod tests;
