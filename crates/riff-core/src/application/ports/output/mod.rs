//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `riff-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::application::stages::{
    ApplyOptions, ApplyReport, BuildOptions, BuildReport, ExecutionMode,
};
use crate::domain::{Descriptor, InitOptions};
use crate::error::RiffResult;

/// Port for filesystem access.
///
/// Implemented by:
/// - `riff_adapters::filesystem::LocalFilesystem` (production)
/// - `riff_adapters::filesystem::DryRunFilesystem` (reads disk, stages writes in memory)
/// - `riff_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Whether writes reach the real filesystem.
    fn mode(&self) -> ExecutionMode;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Names of the regular files directly inside `dir`, sorted.
    fn list_files(&self, dir: &Path) -> RiffResult<Vec<PathBuf>>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> RiffResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> RiffResult<()>;
}

/// Port for descriptor rendering.
///
/// Implemented by:
/// - `riff_adapters::renderer::InvokerRenderer` (built-in invoker templates)
#[cfg_attr(test, mockall::automock)]
pub trait DescriptorRenderer: Send + Sync {
    /// Render the descriptor files for a resolved function.
    fn render(&self, options: &InitOptions) -> RiffResult<Descriptor>;
}

/// Port for the container build engine.
///
/// Implemented by:
/// - `riff_adapters::engine::DockerBuilder` (runs `docker`)
/// - `riff_adapters::engine::DryRunBuilder` (no side effects)
#[cfg_attr(test, mockall::automock)]
pub trait ImageBuilder: Send + Sync {
    fn mode(&self) -> ExecutionMode;

    fn build(&self, options: &BuildOptions) -> RiffResult<BuildReport>;
}

/// Port for the cluster apply engine.
///
/// Implemented by:
/// - `riff_adapters::engine::KubectlApplier` (runs `kubectl`)
/// - `riff_adapters::engine::DryRunApplier` (no side effects)
#[cfg_attr(test, mockall::automock)]
pub trait ManifestApplier: Send + Sync {
    fn mode(&self) -> ExecutionMode;

    fn apply(&self, options: &ApplyOptions) -> RiffResult<ApplyReport>;
}
