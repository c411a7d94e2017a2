//! Filesystem adapters.

mod dry_run;
mod local;
mod memory;

pub use dry_run::DryRunFilesystem;
pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;

use std::io;
use std::path::Path;

use riff_core::{application::ApplicationError, error::RiffError};

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> RiffError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
