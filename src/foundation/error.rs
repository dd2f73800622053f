/// Convenience result type used across the explainer.
pub type ExplainerResult<T> = Result<T, ExplainerError>;

/// Top-level error taxonomy.
///
/// Resolution and transport operations never fail; every variant here is raised while building a
/// clock or a revision, so a bad table is reported once at startup.
#[derive(thiserror::Error, Debug)]
pub enum ExplainerError {
    /// Structurally invalid boundary tables, epoch tables or clock settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while reading or parsing a revision config.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing frames or configs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ExplainerError {
    /// Build an [`ExplainerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ExplainerError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build an [`ExplainerError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
