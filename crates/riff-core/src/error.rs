//! Unified error handling for riff core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors. Both are `transparent`: the message a stage produces is the message
//! the user sees, with no prefix added on the way out.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for riff core operations.
#[derive(Debug, Error, Clone)]
pub enum RiffError {
    /// Resolution rule violated (nothing was touched).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A stage or port failed.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl RiffError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check ~/.riff.yaml and RIFF_* environment variables".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in riff".into(),
                "Please report this issue at: https://github.com/projectriff/riff/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` when the error was raised before any stage ran.
    pub fn is_resolution_error(&self) -> bool {
        matches!(self, Self::Domain(e) if !matches!(e, DomainError::InvalidDescriptor(_)))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    StageFailure,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type RiffResult<T> = Result<T, RiffError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Stage;

    #[test]
    fn domain_messages_pass_through_unchanged() {
        let err: RiffError = DomainError::ConflictingInput {
            command: "command".into(),
            artifact: "demo.py".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "language command conflicts with artifact file extension demo.py"
        );
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.is_resolution_error());
    }

    #[test]
    fn stage_messages_pass_through_unchanged() {
        let err: RiffError = ApplicationError::stage(Stage::Apply, "error: no context").into();
        assert_eq!(err.to_string(), "error: no context");
        assert_eq!(err.category(), ErrorCategory::StageFailure);
        assert!(!err.is_resolution_error());
    }
}
