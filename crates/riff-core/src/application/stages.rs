//! Stage-local options and reports for the build and apply stages.
//!
//! Options are derived from [`InitOptions`]; the engine that consumes them was
//! chosen when the pipeline was built, so `dry_run` here is informational
//! (logging, reporting) and never switches behaviour.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{ImageRef, InitOptions};

/// Whether a port performs side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionMode {
    Real,
    DryRun,
}

impl ExecutionMode {
    pub const fn is_dry_run(self) -> bool {
        matches!(self, Self::DryRun)
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real => f.write_str("real"),
            Self::DryRun => f.write_str("dry-run"),
        }
    }
}

// ── Build ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildOptions {
    /// Build context: the function root.
    pub function_root: PathBuf,
    pub image: ImageRef,
    pub push: bool,
    pub dry_run: bool,
}

impl BuildOptions {
    pub fn from_init(options: &InitOptions, mode: ExecutionMode) -> Self {
        Self {
            function_root: options.function_root.clone(),
            image: options.image(),
            push: options.push,
            dry_run: mode.is_dry_run(),
        }
    }
}

/// What the build stage did (or would have done).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub image: ImageRef,
    /// Engine invocations, rendered as shell-style command lines.
    pub commands: Vec<String>,
    pub pushed: bool,
    pub dry_run: bool,
}

// ── Apply ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyOptions {
    pub function_root: PathBuf,
    /// Manifest paths, already joined onto the function root, in apply order.
    pub manifests: Vec<PathBuf>,
    pub namespace: Option<String>,
    pub image: ImageRef,
    pub dry_run: bool,
}

impl ApplyOptions {
    pub fn from_init(options: &InitOptions, image: ImageRef, mode: ExecutionMode) -> Self {
        Self {
            function_root: options.function_root.clone(),
            manifests: options
                .manifests()
                .into_iter()
                .map(|m| options.function_root.join(m))
                .collect(),
            namespace: options.namespace.clone(),
            image,
            dry_run: mode.is_dry_run(),
        }
    }
}

/// What the apply stage did (or would have done).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub commands: Vec<String>,
    pub applied: Vec<PathBuf>,
    pub dry_run: bool,
}
