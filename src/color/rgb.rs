use std::fmt;

use crate::color::pigment;
use crate::foundation::error::{NeuError, NeuResult};

/// Weighted luminance at or above which a color counts as light.
pub const LIGHT_THRESHOLD: f64 = 128.0;

/// Immutable RGB color with channels nominally in `[0, 255]`.
///
/// Construction does not clamp; every derived color ([`Color::brighten`],
/// [`Color::blend`]) does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Color {
    /// Pure white (`#ffffff`).
    pub const WHITE: Self = Self::rgb(255.0, 255.0, 255.0);
    /// Pure black (`#000000`).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Build a color from raw channel values.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` / `#rrggbb` text (the `#` is optional, case-insensitive).
    pub fn from_hex(text: &str) -> NeuResult<Self> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(NeuError::invalid_format(format!(
                "'{text}' is not a valid hex color"
            )));
        }

        let channel = |pair: &str| -> NeuResult<f64> {
            u8::from_str_radix(pair, 16)
                .map(f64::from)
                .map_err(|_| NeuError::invalid_format(format!("invalid hex byte \"{pair}\"")))
        };

        match digits.len() {
            3 => {
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                Ok(Self::rgb(
                    channel(&expanded[0..2])?,
                    channel(&expanded[2..4])?,
                    channel(&expanded[4..6])?,
                ))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(NeuError::invalid_format(format!(
                "'{text}' is not a valid hex color (expected #rgb or #rrggbb)"
            ))),
        }
    }

    /// Scale every channel by `1 + amount`, clamped to `[0, 255]`.
    ///
    /// Negative amounts darken, positive amounts lighten. `amount` itself is not clamped.
    pub fn brighten(self, amount: f64) -> Self {
        let f = |c: f64| (c + c * amount).clamp(0.0, 255.0);
        Self::rgb(f(self.r), f(self.g), f(self.b))
    }

    /// Perceptual luminance `0.299r + 0.587g + 0.114b`.
    pub fn contrast(self) -> f64 {
        (self.r * 299.0 + self.g * 587.0 + self.b * 114.0) / 1000.0
    }

    /// `true` when [`Color::contrast`] is at least [`LIGHT_THRESHOLD`].
    pub fn is_light(self) -> bool {
        self.contrast() >= LIGHT_THRESHOLD
    }

    /// Negation of [`Color::is_light`].
    pub fn is_dark(self) -> bool {
        !self.is_light()
    }

    /// Mix toward `other` like paint rather than light.
    ///
    /// `t` is clamped to `[0, 1]`; `0` gives `self` and `1` gives `other`, up to rounding.
    /// See [`crate::color::pigment`] for the mixing model.
    pub fn blend(self, other: Self, t: f64) -> Self {
        pigment::mix(self, other, t)
    }

    /// Lowercase `#rrggbb`; channels are clamped and floored first.
    pub fn to_hex(self) -> String {
        fn byte(c: f64) -> u8 {
            c.clamp(0.0, 255.0).floor() as u8
        }
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }

    pub(crate) fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    pub(crate) fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Color {
    type Err = NeuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/rgb.rs"]
mod tests;
