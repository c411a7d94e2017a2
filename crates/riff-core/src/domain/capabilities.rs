//! Language capability registry.
//!
//! Each language the platform has an invoker for is described exactly once by
//! its [`LanguageDef`]. Extension checks, artifact inference, handler
//! defaulting and required-option validation are all table lookups over
//! [`LANGUAGE_REGISTRY`]; the create pipeline itself has no per-language code.
//!
//! # Adding a New Language
//!
//! 1. Add a variant to `Language` in `value_objects.rs`
//! 2. Add a [`LanguageDef`] entry to [`LANGUAGE_REGISTRY`]
//! 3. Add a Dockerfile template in `riff-adapters`
//! 4. That's it — resolution and the pipeline derive from the registry

use std::path::Path;

use crate::domain::value_objects::{Language, Protocol};

// ── Handler rules ────────────────────────────────────────────────────────────

/// How a language derives its handler when `--handler` is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerRule {
    /// The invoker runs the artifact itself; there is no handler.
    NotUsed,
    /// The invoker calls whatever the module exports.
    ModuleExport,
    /// Defaults to the artifact's file stem (`demo.py` → `demo`).
    BaseName,
    /// Must be supplied explicitly.
    Required,
}

/// Options a language may insist on once defaults have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredOption {
    Handler,
}

impl RequiredOption {
    /// The long flag name, without dashes.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Handler => "handler",
        }
    }
}

// ── Language definitions ─────────────────────────────────────────────────────

/// Describes everything the pipeline needs to know about one language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageDef {
    /// The language this definition describes.
    pub language: Language,

    /// Artifact extensions accepted for this language, without the dot.
    pub extensions: &'static [&'static str],

    /// Default-handler derivation.
    pub handler_rule: HandlerRule,

    /// Options that must be present once defaults have been applied.
    pub required_options: &'static [RequiredOption],

    /// Protocol used when `--protocol` is omitted.
    pub default_protocol: Protocol,

    /// Invoker base image, without tag.
    pub invoker_image: &'static str,
}

/// Single source of truth for language capabilities.
pub static LANGUAGE_REGISTRY: &[LanguageDef] = &[
    LanguageDef {
        language: Language::Command,
        extensions: &["sh"],
        handler_rule: HandlerRule::NotUsed,
        required_options: &[],
        default_protocol: Protocol::Stdio,
        invoker_image: "projectriff/shell-function-invoker",
    },
    LanguageDef {
        language: Language::Node,
        extensions: &["js"],
        handler_rule: HandlerRule::ModuleExport,
        required_options: &[],
        default_protocol: Protocol::Http,
        invoker_image: "projectriff/node-function-invoker",
    },
    LanguageDef {
        language: Language::Python,
        extensions: &["py"],
        handler_rule: HandlerRule::BaseName,
        required_options: &[],
        default_protocol: Protocol::Stdio,
        invoker_image: "projectriff/python3-function-invoker",
    },
    LanguageDef {
        language: Language::Java,
        extensions: &["jar"],
        handler_rule: HandlerRule::Required,
        required_options: &[RequiredOption::Handler],
        default_protocol: Protocol::Http,
        invoker_image: "projectriff/java-function-invoker",
    },
    LanguageDef {
        language: Language::Go,
        extensions: &["so"],
        handler_rule: HandlerRule::Required,
        required_options: &[RequiredOption::Handler],
        default_protocol: Protocol::Grpc,
        invoker_image: "projectriff/go-function-invoker",
    },
];

// ── Lookups ──────────────────────────────────────────────────────────────────

/// Look up the definition for `language`.
///
/// Every `Language` variant has an entry; the `language_registry_is_complete`
/// test enforces this.
pub fn find_language(language: Language) -> &'static LanguageDef {
    LANGUAGE_REGISTRY
        .iter()
        .find(|def| def.language == language)
        .unwrap_or_else(|| panic!("no registry entry for language '{language}'"))
}

/// The extension of `artifact`, lowercased, without the dot.
pub fn artifact_extension(artifact: &Path) -> Option<String> {
    artifact
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

/// The language whose extensions include `artifact`'s extension.
pub fn language_for_artifact(artifact: &Path) -> Option<Language> {
    let ext = artifact_extension(artifact)?;
    LANGUAGE_REGISTRY
        .iter()
        .find(|def| def.extensions.contains(&ext.as_str()))
        .map(|def| def.language)
}

/// Whether `artifact` carries an extension accepted by `language`.
pub fn accepts_artifact(language: Language, artifact: &Path) -> bool {
    artifact_extension(artifact)
        .is_some_and(|ext| find_language(language).extensions.contains(&ext.as_str()))
}

/// Whether `artifact` belongs to any registered language.
pub fn is_known_artifact(artifact: &Path) -> bool {
    language_for_artifact(artifact).is_some()
}
