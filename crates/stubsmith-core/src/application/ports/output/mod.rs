//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stubsmith-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Stub, TemplateContext};
use crate::error::StubsmithResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stubsmith_adapters::filesystem::LocalFilesystem` (production)
/// - `stubsmith_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The core never touches `std::fs`; every existence check, directory
/// creation and write goes through this trait.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// `true` if anything (file or directory) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// `true` only if `path` exists and is a directory.
    fn is_directory(&self, path: &Path) -> bool;

    /// Create exactly one directory. The parent must already exist.
    fn make_directory(&self, path: &Path, mode: u32) -> StubsmithResult<()>;

    /// Read a whole file as UTF-8.
    fn read_file(&self, path: &Path) -> StubsmithResult<String>;

    /// Write (create or truncate) a file.
    fn write_file(&self, path: &Path, content: &str) -> StubsmithResult<()>;
}

/// Port for stub text retrieval.
///
/// Implemented by:
/// - `stubsmith_adapters::template_store::BuiltinStubs` (embedded stubs)
/// - `stubsmith_adapters::template_store::DirectoryStubStore` (user overrides)
pub trait TemplateStore: Send + Sync {
    /// Raw text of a stub, placeholders intact.
    fn get(&self, stub: Stub) -> StubsmithResult<String>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `stubsmith_adapters::renderer::SimpleRenderer` (literal `{{Token}}` substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Substitute every known placeholder in `template`.
    ///
    /// Unknown placeholders stay in the output untouched.
    fn render(&self, template: &str, context: &TemplateContext) -> String;
}
