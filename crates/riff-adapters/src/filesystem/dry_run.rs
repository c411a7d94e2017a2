//! Dry-run filesystem: reads reach the real disk, writes never do.

use std::path::{Path, PathBuf};

use riff_core::{
    application::{ExecutionMode, ports::Filesystem},
    error::RiffResult,
};
use tracing::debug;

use super::{LocalFilesystem, MemoryFilesystem};

/// Reads through `F`, stages every write in memory.
///
/// A path counts as existing if either side has it, so a second preview in
/// the same run sees the first one's output.
#[derive(Debug, Clone)]
pub struct DryRunFilesystem<F = LocalFilesystem> {
    reads: F,
    staged: MemoryFilesystem,
}

impl DryRunFilesystem<LocalFilesystem> {
    pub fn new() -> Self {
        Self::over(LocalFilesystem::new())
    }
}

impl Default for DryRunFilesystem<LocalFilesystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Filesystem> DryRunFilesystem<F> {
    pub fn over(reads: F) -> Self {
        Self {
            reads,
            staged: MemoryFilesystem::new().with_mode(ExecutionMode::DryRun),
        }
    }

    /// Writes that would have happened.
    pub fn staged(&self) -> &MemoryFilesystem {
        &self.staged
    }
}

impl<F: Filesystem> Filesystem for DryRunFilesystem<F> {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::DryRun
    }

    fn exists(&self, path: &Path) -> bool {
        self.staged.exists(path) || self.reads.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.reads.is_dir(path) || self.staged.is_dir(path)
    }

    fn list_files(&self, dir: &Path) -> RiffResult<Vec<PathBuf>> {
        self.reads.list_files(dir)
    }

    fn create_dir_all(&self, path: &Path) -> RiffResult<()> {
        self.staged.create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> RiffResult<()> {
        debug!(path = %path.display(), bytes = content.len(), "dry run: staging write");
        self.staged.write_file(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_never_reach_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("echo.sh"), "").unwrap();
        let fs = DryRunFilesystem::new();
        let target = dir.path().join("Dockerfile");

        fs.create_dir_all(dir.path()).unwrap();
        fs.write_file(&target, "FROM x").unwrap();

        assert!(!target.exists());
        assert!(fs.exists(&target));
        assert_eq!(fs.staged().read_file(&target).as_deref(), Some("FROM x"));
        assert_eq!(
            fs.list_files(dir.path()).unwrap(),
            vec![PathBuf::from("echo.sh")]
        );
    }

    #[test]
    fn reads_pass_through() {
        let reads = MemoryFilesystem::new().with_file("/fn/a.py", "");
        let fs = DryRunFilesystem::over(reads);
        assert!(fs.is_dir(Path::new("/fn")));
        assert!(fs.exists(Path::new("/fn/a.py")));
        assert_eq!(fs.mode(), ExecutionMode::DryRun);
    }
}
