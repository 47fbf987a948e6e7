/// Convenience result type used across scrollreveal.
pub type RevealResult<T> = Result<T, RevealError>;

/// Error taxonomy for building reveals.
///
/// Only construction and configuration can fail. Once a registration is live, scroll ticks never
/// surface errors: missing geometry, detached elements and stale measurements are absorbed by the
/// registry.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Invalid user-provided values (negative durations, empty target lists, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Unparseable configuration strings such as markers, ease names or toggle actions.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing specs and scenes.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RevealError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RevealError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
