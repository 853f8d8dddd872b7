//! Infrastructure adapters for Stubsmith.
//!
//! This crate implements the ports defined in `stubsmith-core::application::ports`.
//! It contains all I/O and the embedded stub texts.

pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use template_store::{BuiltinStubs, DirectoryStubStore};
