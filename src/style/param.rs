/// The closed set of configurable emboss parameters.
///
/// Every lookup key the cascade needs is a typed accessor here; nothing is
/// assembled from strings at lookup time.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Param {
    /// Base surface color.
    Background,
    /// Extrusion height; negative values recess the surface.
    Height,
    /// Gradient bias between the two surface tones.
    Pressure,
    /// Highlight/shadow divergence from the base color.
    Intensity,
    /// Light direction in degrees.
    Direction,
    /// Text color used over light surfaces.
    TextLight,
    /// Text color used over dark surfaces.
    TextDark,
}

/// Which of the two style variables for a parameter is consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VarScope {
    /// `--neu-<name>`.
    Primary,
    /// `--default-neu-<name>`.
    Default,
}

impl Param {
    /// Every parameter, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Background,
        Self::Height,
        Self::Pressure,
        Self::Intensity,
        Self::Direction,
        Self::TextLight,
        Self::TextDark,
    ];

    /// Attribute name, e.g. `neu-height`.
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Background => "neu-background",
            Self::Height => "neu-height",
            Self::Pressure => "neu-pressure",
            Self::Intensity => "neu-intensity",
            Self::Direction => "neu-direction",
            Self::TextLight => "neu-text-light",
            Self::TextDark => "neu-text-dark",
        }
    }

    /// Element-local key, e.g. `neuHeight`.
    pub const fn dataset_key(self) -> &'static str {
        match self {
            Self::Background => "neuBackground",
            Self::Height => "neuHeight",
            Self::Pressure => "neuPressure",
            Self::Intensity => "neuIntensity",
            Self::Direction => "neuDirection",
            Self::TextLight => "neuTextLight",
            Self::TextDark => "neuTextDark",
        }
    }

    /// Element-local default key, e.g. `defaultNeuHeight`.
    pub const fn default_dataset_key(self) -> &'static str {
        match self {
            Self::Background => "defaultNeuBackground",
            Self::Height => "defaultNeuHeight",
            Self::Pressure => "defaultNeuPressure",
            Self::Intensity => "defaultNeuIntensity",
            Self::Direction => "defaultNeuDirection",
            Self::TextLight => "defaultNeuTextLight",
            Self::TextDark => "defaultNeuTextDark",
        }
    }

    /// Style variable name without the leading `--`.
    pub const fn style_var(self, scope: VarScope) -> &'static str {
        match (scope, self) {
            (VarScope::Primary, p) => p.attribute(),
            (VarScope::Default, Self::Background) => "default-neu-background",
            (VarScope::Default, Self::Height) => "default-neu-height",
            (VarScope::Default, Self::Pressure) => "default-neu-pressure",
            (VarScope::Default, Self::Intensity) => "default-neu-intensity",
            (VarScope::Default, Self::Direction) => "default-neu-direction",
            (VarScope::Default, Self::TextLight) => "default-neu-text-light",
            (VarScope::Default, Self::TextDark) => "default-neu-text-dark",
        }
    }

    /// Built-in value used when the whole cascade misses.
    pub const fn fallback(self) -> &'static str {
        match self {
            Self::Background => "#fff",
            Self::Height => "0",
            Self::Pressure => "0",
            Self::Intensity => "0.3",
            Self::Direction => "135deg",
            Self::TextLight => "#000",
            Self::TextDark => "#fff",
        }
    }

    /// Match an element-local key (`neuHeight` or `defaultNeuHeight`).
    ///
    /// The flag is `true` for the default form.
    pub fn from_dataset_key(key: &str) -> Option<(Self, bool)> {
        Self::ALL.into_iter().find_map(|p| {
            if key == p.dataset_key() {
                Some((p, false))
            } else if key == p.default_dataset_key() {
                Some((p, true))
            } else {
                None
            }
        })
    }

    /// Match a style variable name, with or without the leading `--`.
    pub fn from_style_var(name: &str) -> Option<(Self, VarScope)> {
        let name = name.trim();
        let name = name.strip_prefix("--").unwrap_or(name);
        Self::ALL.into_iter().find_map(|p| {
            [VarScope::Primary, VarScope::Default]
                .into_iter()
                .find(|&scope| p.style_var(scope) == name)
                .map(|scope| (p, scope))
        })
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.attribute())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/param.rs"]
mod tests;
