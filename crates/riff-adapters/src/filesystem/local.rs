//! Local filesystem adapter using std::fs.

use std::path::{Path, PathBuf};

use riff_core::{
    application::{ExecutionMode, ports::Filesystem},
    error::RiffResult,
};
use walkdir::WalkDir;

use super::map_io_error;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Real
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> RiffResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                map_io_error(&path, e.into(), "list directory")
            })?;
            if entry.file_type().is_file() {
                files.push(PathBuf::from(entry.file_name()));
            }
        }
        files.sort();
        Ok(files)
    }

    fn create_dir_all(&self, path: &Path) -> RiffResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> RiffResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_direct_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.py"), "").unwrap();
        std::fs::write(dir.path().join("a.sh"), "").unwrap();
        std::fs::create_dir(dir.path().join("target")).unwrap();
        std::fs::write(dir.path().join("target/upper.jar"), "").unwrap();

        let files = LocalFilesystem::new().list_files(dir.path()).unwrap();

        assert_eq!(files, vec![PathBuf::from("a.sh"), PathBuf::from("b.py")]);
    }

    #[test]
    fn write_then_exists() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("nested/Dockerfile");

        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, "FROM x").unwrap();

        assert!(fs.exists(&path));
        assert!(!fs.is_dir(&path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "FROM x");
    }

    #[test]
    fn listing_a_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LocalFilesystem::new()
            .list_files(&dir.path().join("missing"))
            .is_err());
    }
}
