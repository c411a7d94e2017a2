//! Scaffold Service - the `init` stage.
//!
//! This service coordinates descriptor generation:
//! 1. Render the descriptor for the resolved options
//! 2. Validate it
//! 3. Write each file, skipping existing ones unless forced
//!
//! Whether writes reach disk is decided by the injected [`Filesystem`]; in
//! dry-run mode every write becomes a preview.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{DescriptorRenderer, Filesystem},
        stages::ExecutionMode,
    },
    domain::{DescriptorKind, DomainValidator as validator, InitOptions},
    error::RiffResult,
};

/// What happened to one descriptor file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileAction {
    Written,
    /// Already present and `--force` was not given.
    Skipped,
    /// Dry run: would have been written.
    Previewed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldedFile {
    /// Joined onto the function root.
    pub path: PathBuf,
    pub kind: DescriptorKind,
    pub action: FileAction,
    pub content: String,
}

/// Result of the scaffold stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub function_root: PathBuf,
    pub files: Vec<ScaffoldedFile>,
    pub dry_run: bool,
}

impl ScaffoldReport {
    pub fn count(&self, action: FileAction) -> usize {
        self.files.iter().filter(|f| f.action == action).count()
    }
}

/// Renders and writes function descriptors.
pub struct ScaffoldService {
    renderer: Box<dyn DescriptorRenderer>,
    filesystem: Arc<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(renderer: Box<dyn DescriptorRenderer>, filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// The filesystem descriptors are written through; also used by the
    /// resolver so both see the same files.
    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    pub fn mode(&self) -> ExecutionMode {
        self.filesystem.mode()
    }

    /// Write the descriptor files for `options`.
    ///
    /// There is no rollback: files written before a failure stay on disk.
    #[instrument(skip_all, fields(name = %options.name, language = %options.language))]
    pub fn scaffold(&self, options: &InitOptions) -> RiffResult<ScaffoldReport> {
        let descriptor = self.renderer.render(options)?;
        validator::validate_descriptor(&descriptor)?;
        debug!(files = descriptor.file_count(), "descriptor rendered");

        let dry_run = self.mode().is_dry_run();
        let mut files = Vec::with_capacity(descriptor.file_count());

        for file in descriptor.files() {
            let path = options.function_root.join(&file.path);

            let action = if self.filesystem.exists(&path) && !options.force {
                info!(path = %path.display(), "exists, skipping (use --force to overwrite)");
                FileAction::Skipped
            } else {
                if let Some(parent) = path.parent() {
                    self.filesystem.create_dir_all(parent)?;
                }
                self.filesystem.write_file(&path, &file.content)?;
                if dry_run {
                    FileAction::Previewed
                } else {
                    info!(path = %path.display(), "wrote descriptor");
                    FileAction::Written
                }
            };

            files.push(ScaffoldedFile {
                path,
                kind: file.kind,
                action,
                content: file.content.clone(),
            });
        }

        Ok(ScaffoldReport {
            function_root: options.function_root.clone(),
            files,
            dry_run,
        })
    }
}
