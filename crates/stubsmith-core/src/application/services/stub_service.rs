//! Stub Service - stub publishing.
//!
//! Copies the stub texts a store serves into a directory so users can edit
//! them. Separated from GenerateService for single responsibility.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, TemplateStore},
        services::DirectoryMaterializer,
    },
    domain::Stub,
    error::StubsmithResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishStatus {
    Written,
    Overwritten,
    Skipped,
}

/// One stub file handled by [`StubService::publish`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedStub {
    pub stub: Stub,
    pub path: PathBuf,
    pub status: PublishStatus,
}

/// Service for stub operations.
pub struct StubService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl StubService {
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Get the text of a stub.
    pub fn get(&self, stub: Stub) -> StubsmithResult<String> {
        self.store.get(stub)
    }

    /// Write every stub into `directory`.
    ///
    /// Existing files are skipped unless `force` is set. The first failure
    /// stops publishing; files already written stay.
    #[instrument(skip(self), fields(directory = %directory.display()))]
    pub fn publish(&self, directory: &Path, force: bool) -> StubsmithResult<Vec<PublishedStub>> {
        DirectoryMaterializer::new(self.filesystem.as_ref()).ensure(directory)?;

        let mut published = Vec::with_capacity(Stub::ALL.len());
        for stub in Stub::ALL {
            let path = directory.join(stub.file_name());
            let exists = self.filesystem.exists(&path);

            let status = match (exists, force) {
                (true, false) => PublishStatus::Skipped,
                (true, true) => PublishStatus::Overwritten,
                (false, _) => PublishStatus::Written,
            };

            if status != PublishStatus::Skipped {
                let text = self.store.get(stub)?;
                self.filesystem.write_file(&path, &text)?;
            }

            published.push(PublishedStub { stub, path, status });
        }

        info!(
            written = published
                .iter()
                .filter(|p| p.status != PublishStatus::Skipped)
                .count(),
            "Stubs published"
        );
        Ok(published)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};

    struct NamedStubs;

    impl TemplateStore for NamedStubs {
        fn get(&self, stub: Stub) -> StubsmithResult<String> {
            if stub == Stub::Trait {
                return Err(ApplicationError::StubNotFound { stub }.into());
            }
            Ok(format!("stub:{stub}"))
        }
    }

    #[test]
    fn skips_existing_files_without_force() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&written);

        let mut fs = MockFilesystem::new();
        fs.expect_is_directory().returning(|_| true);
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().returning(move |path, _| {
            sink.lock().unwrap().push(path.to_path_buf());
            Ok(())
        });

        let service = StubService::new(Box::new(NamedStubs), Box::new(fs));
        let published = service.publish(Path::new("stubs"), false).unwrap();

        assert_eq!(published.len(), Stub::ALL.len());
        assert!(published.iter().all(|p| p.status == PublishStatus::Skipped));
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn store_error_stops_publishing() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_directory().returning(|_| true);
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file().returning(|_, _| Ok(()));

        let service = StubService::new(Box::new(NamedStubs), Box::new(fs));
        let err = service.publish(Path::new("stubs"), true).unwrap_err();
        assert!(err.to_string().contains("trait"));
    }

    #[test]
    fn get_delegates_to_store() {
        let service = StubService::new(Box::new(NamedStubs), Box::new(MockFilesystem::new()));
        assert_eq!(service.get(Stub::Interface).unwrap(), "stub:interface");
    }
}
