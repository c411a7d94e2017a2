// ============================================================================
// domain/error.rs - RESOLUTION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Apart from `InvalidDescriptor`, every variant is raised by the resolver
/// before any stage runs, so it always means "nothing was touched".
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("function path not found: {path}")]
    PathNotFound { path: String },

    #[error("artifact not found: {artifact}")]
    ArtifactNotFound { artifact: String },

    #[error("no artifact found in {path} (looked for {patterns})")]
    NoArtifact { path: String, patterns: String },

    // ========================================================================
    // Conflicting Input (409-level equivalent)
    // ========================================================================
    #[error("language {command} conflicts with artifact file extension {artifact}")]
    ConflictingInput { command: String, artifact: String },

    #[error("multiple candidate artifacts found in {path}: {candidates}")]
    AmbiguousArtifact { path: String, candidates: String },

    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("{language} functions require --{option}")]
    MissingRequiredOption {
        language: String,
        option: &'static str,
    },

    #[error("cannot determine the language of artifact {artifact}")]
    UnsupportedArtifact { artifact: String },

    #[error("unsupported language '{language}'")]
    UnsupportedLanguage { language: String },

    #[error("unsupported protocol '{protocol}'")]
    UnsupportedProtocol { protocol: String },

    #[error("invalid function name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PathNotFound { path } => vec![
                format!("No function directory at '{path}'"),
                "Pass the function root with -f/--filepath or as the last argument".into(),
            ],
            Self::ArtifactNotFound { artifact } => vec![
                format!("Looked for '{artifact}' relative to the function root"),
                "Name the artifact explicitly with -a/--artifact".into(),
            ],
            Self::ConflictingInput { command, .. } => {
                let exts = command
                    .parse::<crate::domain::Language>()
                    .map(|l| l.extensions().join(", "))
                    .unwrap_or_default();
                vec![
                    format!("'{command}' functions expect artifacts ending in: {exts}"),
                    "Drop the language subcommand to infer it from the artifact".into(),
                ]
            }
            Self::NoArtifact { .. } => vec![
                "Name the artifact explicitly with -a/--artifact".into(),
                "Artifacts are only searched for directly in the function root".into(),
            ],
            Self::AmbiguousArtifact { .. } => {
                vec!["Choose one with -a/--artifact".into()]
            }
            Self::MissingRequiredOption { language, option } => vec![
                format!("riff create {language} --{option} <value>"),
            ],
            Self::UnsupportedArtifact { .. } => vec![
                "Supported artifacts: .sh (command), .js (node), .py (python), .jar (java), .so (go)"
                    .into(),
                "Or pick the language explicitly: riff create <language>".into(),
            ],
            Self::InvalidName { .. } => vec![
                "Use lowercase letters, digits, '-' and '.'".into(),
                "Override the name with -n/--name".into(),
            ],
            _ => vec!["Use --help for usage information".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PathNotFound { .. } | Self::ArtifactNotFound { .. } | Self::NoArtifact { .. } => {
                ErrorCategory::NotFound
            }
            Self::ConflictingInput { .. } | Self::AmbiguousArtifact { .. } => {
                ErrorCategory::Conflict
            }
            Self::MissingRequiredOption { .. }
            | Self::UnsupportedArtifact { .. }
            | Self::UnsupportedLanguage { .. }
            | Self::UnsupportedProtocol { .. }
            | Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::InvalidDescriptor(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_message_is_exact() {
        let err = DomainError::ConflictingInput {
            command: "command".into(),
            artifact: "demo.py".into(),
        };
        assert_eq!(
            err.to_string(),
            "language command conflicts with artifact file extension demo.py"
        );
    }

    #[test]
    fn conflict_suggestion_lists_expected_extensions() {
        let err = DomainError::ConflictingInput {
            command: "java".into(),
            artifact: "square.js".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("jar")));
    }

    #[test]
    fn categories() {
        assert_eq!(
            DomainError::PathNotFound { path: "x".into() }.category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            DomainError::MissingRequiredOption {
                language: "java".into(),
                option: "handler",
            }
            .category(),
            ErrorCategory::Validation
        );
    }
}
