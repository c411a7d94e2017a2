//! Application layer errors.
//!
//! These errors represent failures in orchestration, not resolution rules.
//! Resolution errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// The pipeline stage an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Scaffold,
    Build,
    Apply,
}

impl Stage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scaffold => "scaffold",
            Self::Build => "build",
            Self::Apply => "apply",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// An engine reported failure. The message is the engine's own, unchanged.
    #[error("{message}")]
    StageFailure { stage: Stage, message: String },

    /// The engine binary is not installed.
    #[error("{tool} not found on PATH")]
    ToolNotFound { stage: Stage, tool: &'static str },

    /// Descriptor rendering failed.
    #[error("descriptor rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared state lock poisoned.
    #[error("internal lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Shorthand for [`ApplicationError::StageFailure`].
    pub fn stage(stage: Stage, message: impl Into<String>) -> Self {
        Self::StageFailure {
            stage,
            message: message.into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StageFailure { stage, .. } => vec![
                format!("The {stage} stage failed; see the message above"),
                "Re-run with --dry-run to check the resolved options".into(),
            ],
            Self::ToolNotFound { tool, .. } => vec![
                format!("Install {tool} and make sure it is on your PATH"),
                "Or use --dry-run to skip the build and apply stages".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions in the function root".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StageFailure { .. } => ErrorCategory::StageFailure,
            Self::ToolNotFound { .. } => ErrorCategory::Configuration,
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_failure_message_is_verbatim() {
        let err = ApplicationError::stage(Stage::Build, "denied: requested access to the resource is denied");
        assert_eq!(
            err.to_string(),
            "denied: requested access to the resource is denied"
        );
    }

    #[test]
    fn tool_not_found_is_configuration() {
        let err = ApplicationError::ToolNotFound {
            stage: Stage::Apply,
            tool: "kubectl",
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.suggestions().iter().any(|s| s.contains("kubectl")));
    }
}
