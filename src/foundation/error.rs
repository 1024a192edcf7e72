/// Convenience result type used across handoff.
pub type HandoffResult<T> = Result<T, HandoffError>;

/// Top-level error taxonomy used by engine and host APIs.
#[derive(thiserror::Error, Debug)]
pub enum HandoffError {
    /// An operation was called in a phase that does not allow it.
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// Invalid user-provided configuration or geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or stepping an animation.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while rasterizing layers or capturing snapshots.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HandoffError {
    /// Build a [`HandoffError::Precondition`] value.
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// Build a [`HandoffError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HandoffError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`HandoffError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`HandoffError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True when an operation was called in the wrong phase.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
