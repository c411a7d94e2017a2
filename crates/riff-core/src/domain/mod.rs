// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for riff.
//!
//! This module contains pure business logic with ZERO I/O. Directory
//! listings, file writes, image builds and cluster calls are all reached
//! through ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or process calls
//! - **Data over code**: Per-language behaviour is a registry entry, not a branch
//!
// Public API - what the world sees
pub mod capabilities;
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    DEFAULT_VERSION, Descriptor, DescriptorFile, DescriptorKind, FunctionRequest, ImageRef,
    InitOptions, RenderContext,
};

pub use capabilities::{HandlerRule, LanguageDef, RequiredOption};
pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
pub use value_objects::{Language, Protocol};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn language_parses_correctly() {
        assert_eq!(Language::from_str("python").unwrap(), Language::Python);
        assert_eq!(Language::from_str("PY").unwrap(), Language::Python);
        assert_eq!(Language::from_str("shell").unwrap(), Language::Command);
        assert_eq!(Language::from_str("golang").unwrap(), Language::Go);
        assert!(matches!(
            Language::from_str("rust"),
            Err(DomainError::UnsupportedLanguage { .. })
        ));
    }

    #[test]
    fn language_display_round_trips_cli_names() {
        for language in Language::ALL {
            assert_eq!(Language::from_str(language.as_str()).unwrap(), language);
        }
    }

    #[test]
    fn language_extensions_come_from_registry() {
        assert_eq!(Language::Java.extensions(), &["jar"]);
        assert_eq!(Language::Command.extensions(), &["sh"]);
    }

    #[test]
    fn protocol_parses_correctly() {
        assert_eq!(Protocol::from_str("GRPC").unwrap(), Protocol::Grpc);
        assert_eq!(Protocol::Stdio.to_string(), "stdio");
        assert!(Protocol::from_str("smtp").is_err());
    }
}
