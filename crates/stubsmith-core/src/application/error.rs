//! Application layer errors.
//!
//! These errors represent failures in orchestration, not naming rules.
//! Naming and configuration-value errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{ArtifactKind, Stub};
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Required configuration keys are absent. Fatal for the whole run.
    #[error("Missing required configuration: {}", keys.join(", "))]
    ConfigMissing { keys: Vec<String> },

    /// Target file of an artifact is already present.
    #[error("{kind} already exists at {path}")]
    AlreadyExists { kind: ArtifactKind, path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// No text is available for a stub.
    #[error("Stub not found: {stub}")]
    StubNotFound { stub: Stub },

    /// Store access failed (lock poisoned, etc.).
    #[error("Stub store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigMissing { keys } => vec![
                format!("Add the missing keys to the [generator] table: {}", keys.join(", ")),
                "Run: stubsmith init to write a default configuration".into(),
                "Or set them with STUBSMITH_GENERATOR__<KEY> environment variables".into(),
            ],
            Self::AlreadyExists { path, .. } => vec![
                format!("Remove or rename {} first", path.display()),
                "Choose a different name or --dir".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StubNotFound { stub } => vec![
                format!("Add {} to your stub directory", stub.file_name()),
                "Run: stubsmith publish to restore the default stubs".into(),
            ],
            Self::StoreLockError => vec![
                "The stub store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigMissing { .. } => ErrorCategory::Configuration,
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::StubNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_missing_lists_every_key() {
        let err = ApplicationError::ConfigMissing {
            keys: vec!["service_directory".into(), "trait_directory".into()],
        };
        assert_eq!(
            err.to_string(),
            "Missing required configuration: service_directory, trait_directory"
        );
        assert!(err.suggestions()[0].contains("trait_directory"));
    }

    #[test]
    fn already_exists_names_kind_and_path() {
        let err = ApplicationError::AlreadyExists {
            kind: ArtifactKind::Repository,
            path: PathBuf::from("app/Repositories/OrdersRepositoryInterface.php"),
        };
        assert_eq!(
            err.to_string(),
            "repository already exists at app/Repositories/OrdersRepositoryInterface.php"
        );
    }

    #[test]
    fn stub_not_found_suggests_file_name() {
        let err = ApplicationError::StubNotFound { stub: Stub::Trait };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions()[0].contains("trait.stub"));
    }
}
