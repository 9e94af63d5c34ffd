//! Local filesystem adapter using std::fs.

use std::path::Path;

use wm_core::{
    application::ports::Filesystem,
    error::{WmResult, io_error},
};

/// Production filesystem implementation using `std::fs`.
///
/// `write_file` truncates existing files - re-generating into a non-empty
/// destination silently overwrites matching files and leaves everything
/// else alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> WmResult<()> {
        std::fs::create_dir_all(path).map_err(|e| io_error("create directory", path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> WmResult<()> {
        std::fs::write(path, content).map_err(|e| io_error("write file", path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_reports_existence() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("a/b/c.txt");

        fs.create_dir_all(file.parent().unwrap()).unwrap();
        fs.write_file(&file, "hello").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "hello");
    }

    #[test]
    fn write_truncates_existing_file() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("f.txt");

        fs.write_file(&file, "long original content").unwrap();
        fs.write_file(&file, "short").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "short");
    }

    #[test]
    fn write_into_missing_parent_is_io_error() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let err = fs
            .write_file(&temp.path().join("no/such/dir/f.txt"), "x")
            .unwrap_err();
        assert!(matches!(err, wm_core::error::WmError::Io { .. }));
    }
}
