//! Domain value objects: Language, Protocol.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! They hold NO capability logic. Extensions, handler rules and invoker images
//! live in `capabilities.rs`. This file's only job is to define the types,
//! their string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a capability entry in `capabilities.rs`
//! 4. Done — nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Language ─────────────────────────────────────────────────────────────────

/// A function implementation language.
///
/// `Command` is the shell/command invoker: the artifact is an executable
/// script that reads the message on stdin and writes the reply on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Command,
    Node,
    Python,
    Java,
    Go,
}

impl Language {
    /// Every supported language, in registry order.
    pub const ALL: [Language; 5] = [
        Self::Command,
        Self::Node,
        Self::Python,
        Self::Java,
        Self::Go,
    ];

    /// The name used on the command line (`riff create <name>`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Node => "node",
            Self::Python => "python",
            Self::Java => "java",
            Self::Go => "go",
        }
    }

    /// File extensions an artifact for this language may carry.
    ///
    /// Delegates to `capabilities::find_language`.
    pub fn extensions(self) -> &'static [&'static str] {
        crate::domain::capabilities::find_language(self).extensions
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "command" | "shell" | "sh" => Ok(Self::Command),
            "node" | "js" | "javascript" => Ok(Self::Node),
            "python" | "py" => Ok(Self::Python),
            "java" => Ok(Self::Java),
            "go" | "golang" => Ok(Self::Go),
            other => Err(DomainError::UnsupportedLanguage {
                language: other.to_string(),
            }),
        }
    }
}

// ── Protocol ─────────────────────────────────────────────────────────────────

/// Wire protocol spoken between the function sidecar and the invoker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Grpc,
    Stdio,
}

impl Protocol {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Grpc => "grpc",
            Self::Stdio => "stdio",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "grpc" => Ok(Self::Grpc),
            "stdio" => Ok(Self::Stdio),
            other => Err(DomainError::UnsupportedProtocol {
                protocol: other.to_string(),
            }),
        }
    }
}
