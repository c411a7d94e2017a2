//! Infrastructure adapters for riff.
//!
//! This crate implements the ports defined in `riff_core::application::ports`.
//! It contains all external dependencies and I/O operations: the local
//! filesystem, descriptor templates, and the `docker` / `kubectl` engines.

pub mod engine;
pub mod filesystem;
pub mod invoker_templates;
pub mod renderer;

// Re-export commonly used adapters
pub use engine::{DockerBuilder, DryRunApplier, DryRunBuilder, KubectlApplier};
pub use filesystem::{DryRunFilesystem, LocalFilesystem, MemoryFilesystem};
pub use renderer::InvokerRenderer;
