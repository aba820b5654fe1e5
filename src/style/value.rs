use crate::foundation::error::{NeuError, NeuResult};

/// Coerce length text (`"10"`, `"-4.5px"`) to a finite number.
pub fn parse_length(text: &str) -> NeuResult<f64> {
    let t = text.trim();
    let t = t.strip_suffix("px").unwrap_or(t).trim_end();
    parse_finite(t).ok_or_else(|| NeuError::invalid_number(format!("'{text}' is not a number")))
}

/// Coerce angle text to degrees.
///
/// Bare numbers are degrees; `deg`, `rad`, `grad` and `turn` suffixes are converted.
pub fn parse_angle(text: &str) -> NeuResult<f64> {
    let t = text.trim();

    // `grad` must be tried before `rad`.
    let units: [(&str, f64); 4] = [
        ("grad", 0.9),
        ("turn", 360.0),
        ("deg", 1.0),
        ("rad", 180.0 / std::f64::consts::PI),
    ];
    let (number, scale) = units
        .iter()
        .find_map(|&(suffix, scale)| t.strip_suffix(suffix).map(|n| (n.trim_end(), scale)))
        .unwrap_or((t, 1.0));

    parse_finite(number)
        .map(|v| v * scale)
        .ok_or_else(|| NeuError::invalid_number(format!("'{text}' is not an angle")))
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/style/value.rs"]
mod tests;
