//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeSet, HashMap, HashSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use stubsmith_core::{
    application::{ApplicationError, ports::Filesystem},
    error::StubsmithResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// service. Records how many directories were created and can be told to
/// fail operations under chosen paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    modes: HashMap<PathBuf, u32>,
    make_directory_calls: usize,
    write_calls: usize,
    failing_directories: Vec<PathBuf>,
    failing_writes: Vec<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories implicitly.
    ///
    /// Seeding does not count as a write.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            add_ancestors(&mut inner.directories, parent);
        }
        inner.files.insert(path.to_path_buf(), content.into());
    }

    /// Seed a directory and its ancestors.
    pub fn add_directory(&self, path: impl AsRef<Path>) {
        let mut inner = self.inner.write().unwrap();
        add_ancestors(&mut inner.directories, path.as_ref());
    }

    /// Read a file's content (testing helper).
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let sorted: BTreeSet<_> = inner.files.keys().cloned().collect();
        sorted.into_iter().collect()
    }

    /// Mode a directory was created with, if it was created through the port.
    pub fn mode_of(&self, path: impl AsRef<Path>) -> Option<u32> {
        self.inner.read().unwrap().modes.get(path.as_ref()).copied()
    }

    /// Number of successful `make_directory` calls so far.
    pub fn make_directory_calls(&self) -> usize {
        self.inner.read().unwrap().make_directory_calls
    }

    /// Number of successful `write_file` calls so far.
    pub fn write_calls(&self) -> usize {
        self.inner.read().unwrap().write_calls
    }

    /// Make `make_directory` fail for `path` and everything below it.
    pub fn fail_directories_under(&self, path: impl AsRef<Path>) {
        let mut inner = self.inner.write().unwrap();
        inner.failing_directories.push(path.as_ref().to_path_buf());
    }

    /// Make `write_file` fail for `path` and everything below it.
    pub fn fail_writes_under(&self, path: impl AsRef<Path>) {
        let mut inner = self.inner.write().unwrap();
        inner.failing_writes.push(path.as_ref().to_path_buf());
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || is_dir(&inner.directories, path)
    }

    fn is_directory(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        is_dir(&inner.directories, path)
    }

    fn make_directory(&self, path: &Path, mode: u32) -> StubsmithResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.failing_directories.iter().any(|p| path.starts_with(p)) {
            return Err(failure(path, "injected directory failure"));
        }
        if inner.files.contains_key(path) {
            return Err(failure(path, "a file exists at this path"));
        }
        if let Some(parent) = path.parent() {
            if !is_dir(&inner.directories, parent) {
                return Err(failure(path, "Parent directory does not exist"));
            }
        }

        if inner.directories.insert(path.to_path_buf()) {
            inner.modes.insert(path.to_path_buf(), mode);
            inner.make_directory_calls += 1;
        }
        Ok(())
    }

    fn read_file(&self, path: &Path) -> StubsmithResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| failure(path, "No such file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StubsmithResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.failing_writes.iter().any(|p| path.starts_with(p)) {
            return Err(failure(path, "injected write failure"));
        }
        if let Some(parent) = path.parent() {
            if !is_dir(&inner.directories, parent) {
                return Err(failure(path, "Parent directory does not exist"));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.write_calls += 1;
        Ok(())
    }
}

/// Paths without a normal component (`""`, `/`, `.`) always exist.
fn is_dir(directories: &HashSet<PathBuf>, path: &Path) -> bool {
    !path
        .components()
        .any(|c| matches!(c, Component::Normal(_)))
        || directories.contains(path)
}

fn add_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn failure(path: &Path, reason: &str) -> stubsmith_core::error::StubsmithError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_directory_needs_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.make_directory(Path::new("app/Services"), 0o755).is_err());

        fs.make_directory(Path::new("app"), 0o755).unwrap();
        fs.make_directory(Path::new("app/Services"), 0o755).unwrap();
        assert!(fs.is_directory(Path::new("app/Services")));
        assert_eq!(fs.make_directory_calls(), 2);
        assert_eq!(fs.mode_of("app/Services"), Some(0o755));
    }

    #[test]
    fn seeded_file_creates_parents() {
        let fs = MemoryFilesystem::new();
        fs.add_file("app/Services/Invoice.php", "<?php");

        assert!(fs.is_directory(Path::new("app/Services")));
        assert!(fs.exists(Path::new("app/Services/Invoice.php")));
        assert!(!fs.is_directory(Path::new("app/Services/Invoice.php")));
        assert_eq!(fs.write_calls(), 0);
        assert_eq!(fs.make_directory_calls(), 0);
    }

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        let err = fs
            .write_file(Path::new("missing/Invoice.php"), "x")
            .unwrap_err();
        assert!(err.to_string().contains("Parent directory does not exist"));

        fs.write_file(Path::new("Invoice.php"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("Invoice.php")).unwrap(), "x");
    }

    #[test]
    fn injected_failures_apply_below_path() {
        let fs = MemoryFilesystem::new();
        fs.add_directory("app");
        fs.fail_directories_under("app/Traits");
        fs.fail_writes_under("app/Services");

        assert!(fs.make_directory(Path::new("app/Traits"), 0o755).is_err());
        assert!(fs.make_directory(Path::new("app/Services"), 0o755).is_ok());
        assert!(fs.write_file(Path::new("app/Services/A.php"), "").is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.add_file("a.txt", "1");
        assert_eq!(handle.contents("a.txt").as_deref(), Some("1"));
    }
}
