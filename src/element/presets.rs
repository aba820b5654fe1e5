use std::path::Path;

use crate::element::request::{AnimationRequest, Target};
use crate::foundation::error::{NeuError, NeuResult};

/// Pointer/focus state of an interactive element.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionState {
    /// Neither hovered nor pressed.
    #[default]
    Base,
    /// Pointer over the element.
    Hover,
    /// Pressed or focused.
    Active,
}

impl std::str::FromStr for InteractionState {
    type Err = NeuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "base" => Ok(Self::Base),
            "hover" => Ok(Self::Hover),
            "active" => Ok(Self::Active),
            other => Err(NeuError::validation(format!(
                "unknown interaction state '{other}' (expected base, hover or active)"
            ))),
        }
    }
}

/// Animation requests for each [`InteractionState`].
///
/// The defaults raise the surface and tilt pressure from concave at rest to
/// flat on hover to convex when pressed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Presets {
    /// Request used at rest.
    pub base: AnimationRequest,
    /// Request used on hover.
    pub hover: AnimationRequest,
    /// Request used while pressed or focused.
    pub active: AnimationRequest,
}

impl Default for Presets {
    fn default() -> Self {
        let base = AnimationRequest::new()
            .duration(500.0)
            .pressure(-0.1)
            .height(10.0)
            .direction(180.0);
        Self {
            base,
            hover: base.pressure(0.0),
            active: base.pressure(0.1),
        }
    }
}

impl Presets {
    /// Request for `state`.
    pub fn for_state(&self, state: InteractionState) -> &AnimationRequest {
        match state {
            InteractionState::Base => &self.base,
            InteractionState::Hover => &self.hover,
            InteractionState::Active => &self.active,
        }
    }

    /// Parse presets from JSON; missing states keep their defaults.
    pub fn from_json_str(json: &str) -> NeuResult<Self> {
        let presets: Self = serde_json::from_str(json)?;
        presets.validate()?;
        Ok(presets)
    }

    /// Read and parse a JSON file.
    pub fn from_path(path: &Path) -> NeuResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            NeuError::Other(anyhow::Error::new(e).context(format!("read '{}'", path.display())))
        })?;
        Self::from_json_str(&text)
    }

    /// Reject non-finite durations and explicit numeric targets.
    pub fn validate(&self) -> NeuResult<()> {
        for (name, req) in [
            ("base", &self.base),
            ("hover", &self.hover),
            ("active", &self.active),
        ] {
            if !req.duration.is_finite() || req.duration < 0.0 {
                return Err(NeuError::validation(format!(
                    "preset '{name}': duration must be a finite number >= 0"
                )));
            }
            for (field, target) in [
                ("height", req.height),
                ("pressure", req.pressure),
                ("intensity", req.intensity),
                ("direction", req.direction),
            ] {
                if let Target::Explicit(v) = target {
                    if !v.is_finite() {
                        return Err(NeuError::validation(format!(
                            "preset '{name}': {field} must be finite"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/element/presets.rs"]
mod tests;
