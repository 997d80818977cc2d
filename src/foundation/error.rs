/// Convenience result type used across artgen.
pub type ArtgenResult<T> = Result<T, ArtgenError>;

/// Top-level error taxonomy used by construction and configuration APIs.
///
/// The frame loop itself never returns these: a bad frame degrades to a no-op paint.
#[derive(thiserror::Error, Debug)]
pub enum ArtgenError {
    /// Invalid user-provided sizes, values or shape data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while creating or painting drawing surfaces.
    #[error("render error: {0}")]
    Render(String),

    /// Invalid or unreadable engine configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArtgenError {
    /// Build an [`ArtgenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ArtgenError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`ArtgenError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build an [`ArtgenError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
