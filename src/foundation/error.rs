/// Convenience result type used across Ricochet.
pub type RicochetResult<T> = Result<T, RicochetError>;

/// Top-level error taxonomy used by the loading and batch APIs.
///
/// Single-frame evaluation is infallible; these errors only surface at configuration, IO and
/// threading boundaries.
#[derive(thiserror::Error, Debug)]
pub enum RicochetError {
    /// Invalid user-provided scene configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while scheduling or collecting frame evaluations.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RicochetError {
    /// Build a [`RicochetError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RicochetError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`RicochetError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
