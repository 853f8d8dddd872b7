//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a service" or "publish the stubs".

pub mod directory_service;
pub mod generate_service;
pub mod stub_service;

pub use directory_service::{DEFAULT_DIRECTORY_MODE, DirectoryMaterializer};
pub use generate_service::{
    ArtifactOutcome, BaseFileOutcome, FilePlan, GenerateService, GenerationPlan,
    GenerationReport, GenerationStage, OutcomeStatus, PlannedArtifact, ResolvedArtifact,
};
pub use stub_service::{PublishStatus, PublishedStub, StubService};
