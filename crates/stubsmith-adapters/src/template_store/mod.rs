//! Stub stores.

pub(crate) mod builtin;
mod directory;

pub use builtin::{BuiltinStubs, embedded};
pub use directory::DirectoryStubStore;
