//! Application layer for Stubsmith.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, StubService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain layer but owns no naming or
//! path rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ArtifactOutcome, BaseFileOutcome, DirectoryMaterializer, FilePlan, GenerateService,
    GenerationPlan, GenerationReport, GenerationStage, OutcomeStatus, PlannedArtifact,
    PublishStatus, PublishedStub, ResolvedArtifact, StubService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
