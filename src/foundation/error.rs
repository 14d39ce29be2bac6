/// Convenience result type used across the crate.
pub type PromoResult<T> = Result<T, PromoError>;

/// Top-level error taxonomy.
///
/// Frame sampling itself is total; errors only surface when configuration is built or when a
/// host asks for something that does not exist (unknown composition, frame past the end).
#[derive(thiserror::Error, Debug)]
pub enum PromoError {
    /// Invalid configuration or host request.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid curve definition (breakpoints, spring parameters).
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while producing a snapshot for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PromoError {
    /// Build a [`PromoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PromoError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`PromoError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`PromoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
