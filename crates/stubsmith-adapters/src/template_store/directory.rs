//! Stub store reading user overrides from a directory.

use std::path::{Path, PathBuf};

use stubsmith_core::{
    application::ports::{Filesystem, TemplateStore},
    domain::Stub,
    error::StubsmithResult,
};
use tracing::debug;

use super::BuiltinStubs;

/// Serves `<directory>/<stub>.stub` when present, otherwise the fallback.
pub struct DirectoryStubStore {
    filesystem: Box<dyn Filesystem>,
    directory: PathBuf,
    fallback: BuiltinStubs,
}

impl DirectoryStubStore {
    pub fn new(filesystem: Box<dyn Filesystem>, directory: impl Into<PathBuf>) -> Self {
        Self {
            filesystem,
            directory: directory.into(),
            fallback: BuiltinStubs::new(),
        }
    }

    /// Use a different store for stubs the directory does not override.
    pub fn with_fallback(mut self, fallback: BuiltinStubs) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path the override for `stub` would live at.
    pub fn override_path(&self, stub: Stub) -> PathBuf {
        self.directory.join(stub.file_name())
    }

    pub fn is_overridden(&self, stub: Stub) -> bool {
        self.filesystem.exists(&self.override_path(stub))
    }
}

impl TemplateStore for DirectoryStubStore {
    fn get(&self, stub: Stub) -> StubsmithResult<String> {
        let path = self.override_path(stub);
        if self.filesystem.exists(&path) {
            debug!(stub = %stub, path = %path.display(), "Using stub override");
            return self.filesystem.read_file(&path);
        }
        self.fallback.get(stub)
    }
}
