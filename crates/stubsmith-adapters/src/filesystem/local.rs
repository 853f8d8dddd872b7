//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use stubsmith_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StubsmithError, StubsmithResult},
};

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
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn make_directory(&self, path: &Path, mode: u32) -> StubsmithResult<()> {
        let mut builder = std::fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        #[cfg(not(unix))]
        {
            // No permission bits outside unix.
            let _ = mode;
        }

        match builder.create(path) {
            Ok(()) => Ok(()),
            // Lost a race with another process creating the same directory.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            Err(e) => Err(map_io_error(path, e, "create directory")),
        }
    }

    fn read_file(&self, path: &Path) -> StubsmithResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StubsmithResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StubsmithError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_directory_creates_one_level() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("Services");

        fs.make_directory(&dir, 0o755).unwrap();
        assert!(fs.is_directory(&dir));
    }

    #[test]
    fn make_directory_requires_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let err = fs
            .make_directory(&tmp.path().join("a/b"), 0o755)
            .unwrap_err();
        assert!(err.to_string().contains("create directory"));
    }

    #[test]
    fn make_directory_tolerates_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        fs.make_directory(tmp.path(), 0o755).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn make_directory_applies_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("private");

        fs.make_directory(&dir, 0o700).unwrap();
        let mode = std::fs::metadata(&dir).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[test]
    fn write_then_read() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("Invoice.php");

        assert!(!fs.exists(&file));
        fs.write_file(&file, "<?php\n").unwrap();
        assert!(fs.exists(&file));
        assert!(!fs.is_directory(&file));
        assert_eq!(fs.read_file(&file).unwrap(), "<?php\n");
    }

    #[test]
    fn read_missing_file_is_filesystem_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .read_file(&tmp.path().join("missing.stub"))
            .unwrap_err();
        assert!(matches!(
            err,
            StubsmithError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
