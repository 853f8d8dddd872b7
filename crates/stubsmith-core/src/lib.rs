//! Stubsmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stubsmith
//! source generator: it turns a base name plus configuration into service,
//! repository-interface and trait files, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stubsmith-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (GenerateService, DirectoryMaterializer)│
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Filesystem, Stubs, Render)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stubsmith-adapters (Infrastructure)  │
//! │ (LocalFilesystem, BuiltinStubs, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (NameTransformer, PathResolver, Context)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stubsmith_adapters::{BuiltinStubs, LocalFilesystem, SimpleRenderer};
//! use stubsmith_core::{
//!     application::GenerateService,
//!     domain::{GenerationRequest, GeneratorConfig},
//! };
//!
//! // 1. Configuration is a plain key/value mapping
//! let config = GeneratorConfig::from_pairs([
//!     ("service_directory", "Services"),
//!     ("repository_directory", "Repositories"),
//!     ("repository_append", "RepositoryInterface"),
//! ])
//! .unwrap();
//!
//! // 2. Describe what to generate
//! let request = GenerationRequest::new("invoice").with_interface(None);
//!
//! // 3. Run with injected adapters
//! let service = GenerateService::new(
//!     config,
//!     Box::new(BuiltinStubs::new()),
//!     Box::new(SimpleRenderer::new()),
//!     Box::new(LocalFilesystem::new()),
//! );
//! let report = service.generate(&request, "app").unwrap();
//! assert_eq!(report.created_count(), 2);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArtifactOutcome, DirectoryMaterializer, GenerateService, GenerationPlan,
        GenerationReport, GenerationStage, OutcomeStatus, StubService,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactLocation, GenerationRequest, GeneratorConfig, KindConfig,
        NameTransformer, PathResolver, ResolvedName, Stub, TemplateContext,
    };
    pub use crate::error::{StubsmithError, StubsmithResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
