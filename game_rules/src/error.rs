//! Error types for rules resolution.

use thiserror::Error;

/// Failures raised by the rules engine.
///
/// Every failure is raised before any entity is mutated.
#[derive(Debug, Error)]
pub enum RulesError {
    /// A required entity or target was missing or of the wrong kind.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The skill data has no skill with this name.
    #[error("no skill named `{0}`")]
    SkillNotFound(String),

    /// A switch was read before it was ever set.
    #[error("switch `{0}` has not been set")]
    SwitchNotFound(String),

    /// Config or skill data was not valid TOML for its schema.
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Skill data was not valid JSON for its schema.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl RulesError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        RulesError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, RulesError>;
