//! Directory materialization.
//!
//! Creates the missing segments of a directory path one at a time through the
//! `Filesystem` port, so a failure part-way leaves the created prefix behind
//! and a repeated call performs no creation at all.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    error::StubsmithResult,
};

/// Permission bits for created directories.
pub const DEFAULT_DIRECTORY_MODE: u32 = 0o755;

/// Idempotent "mkdir -p" over the `Filesystem` port.
#[derive(Clone, Copy)]
pub struct DirectoryMaterializer<'a> {
    filesystem: &'a dyn Filesystem,
    mode: u32,
}

impl<'a> DirectoryMaterializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self {
            filesystem,
            mode: DEFAULT_DIRECTORY_MODE,
        }
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    /// Ensure every segment of `path` exists as a directory.
    ///
    /// Returns the number of directories created. Existing segments are left
    /// untouched; a segment occupied by a file is a `FilesystemError`.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn ensure(&self, path: &Path) -> StubsmithResult<usize> {
        let mut current = PathBuf::new();
        let mut created = 0;

        for component in path.components() {
            current.push(component);

            // Roots and `.` always exist.
            if !matches!(component, Component::Normal(_) | Component::ParentDir) {
                continue;
            }

            if self.filesystem.is_directory(&current) {
                continue;
            }

            if self.filesystem.exists(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: current,
                    reason: "path exists but is not a directory".into(),
                }
                .into());
            }

            self.filesystem.make_directory(&current, self.mode)?;
            debug!(directory = %current.display(), "Created directory");
            created += 1;
        }

        Ok(created)
    }
}
