//! Application layer for riff.
//!
//! This layer contains:
//! - **Resolver**: turns raw flags into resolved `InitOptions`
//! - **Services**: Use case orchestration (ScaffoldService, CreatePipeline)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! per-language rules itself. Those live in `crate::domain::capabilities`.

pub mod error;
pub mod ports;
pub mod resolver;
pub mod services;
pub mod stages;

pub use services::{
    ApplyOutcome, BuildOutcome, CreateOutcome, CreatePipeline, FileAction, InitOutcome,
    ScaffoldReport, ScaffoldService, ScaffoldedFile,
};

// Re-export port traits (for adapter implementation)
pub use ports::{DescriptorRenderer, Filesystem, ImageBuilder, ManifestApplier};

pub use error::{ApplicationError, Stage};
pub use resolver::{ResolveContext, Resolver};
pub use stages::{ApplyOptions, ApplyReport, BuildOptions, BuildReport, ExecutionMode};
