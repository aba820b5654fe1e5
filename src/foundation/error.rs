/// Convenience result type used across neumorph.
pub type NeuResult<T> = Result<T, NeuError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Missing configuration is not an error: the resolver reports it as `None`.
/// Easing non-convergence and animation preemption never produce errors either.
#[derive(thiserror::Error, Debug)]
pub enum NeuError {
    /// Malformed color text (anything other than 3 or 6 hex digits).
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// A length or angle value that does not coerce to a number.
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// Invalid user-provided configuration (curves, style trees, presets).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NeuError {
    /// Build a [`NeuError::InvalidFormat`] value.
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Build a [`NeuError::InvalidNumber`] value.
    pub fn invalid_number(msg: impl Into<String>) -> Self {
        Self::InvalidNumber(msg.into())
    }

    /// Build a [`NeuError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`NeuError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for NeuError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
