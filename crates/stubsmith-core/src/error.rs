//! Unified error handling for Stubsmith Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stubsmith Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StubsmithError {
    /// Errors from the domain layer (naming and configuration rules).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and I/O failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl StubsmithError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for the missing-configuration precondition failure.
    pub fn is_config_missing(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::ConfigMissing { .. })
        )
    }

    /// `true` when the target file of an artifact was already present.
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::AlreadyExists { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StubsmithResult<T> = Result<T, StubsmithError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::ArtifactKind;

    #[test]
    fn config_missing_is_configuration_category() {
        let err: StubsmithError = ApplicationError::ConfigMissing {
            keys: vec!["service_directory".into()],
        }
        .into();
        assert!(err.is_config_missing());
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn already_exists_is_conflict() {
        let err: StubsmithError = ApplicationError::AlreadyExists {
            kind: ArtifactKind::Repository,
            path: PathBuf::from("Repositories/OrdersRepositoryInterface.php"),
        }
        .into();
        assert!(err.is_already_exists());
        assert_eq!(err.category(), ErrorCategory::Conflict);
    }

    #[test]
    fn domain_message_is_transparent() {
        let err: StubsmithError = DomainError::InvalidName {
            name: "9lives".into(),
            reason: "must start with a letter".into(),
        }
        .into();
        assert!(err.to_string().starts_with("Invalid name '9lives'"));
    }
}
