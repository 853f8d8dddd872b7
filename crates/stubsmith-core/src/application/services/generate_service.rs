//! Generate Service - main application orchestrator.
//!
//! This service coordinates one generation run:
//! 1. Check that every requested kind is configured
//! 2. Resolve names, locations and template contexts for all requested artifacts
//! 3. Per artifact, in fixed order (service, interface, trait): ensure its
//!    directory, create its base file if missing, check for a collision, then
//!    render and write
//!
//! Artifacts are independent units of failure: a collision or filesystem
//! error on one is recorded in the report and the next artifact is still
//! attempted. Only missing configuration aborts the run, before any mutation.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
        services::DirectoryMaterializer,
    },
    domain::{
        ArtifactKind, ArtifactLocation, GenerationRequest, GeneratorConfig, NameTransformer,
        PathResolver, ResolvedName, Stub, TemplateContext,
    },
    error::{StubsmithError, StubsmithResult},
};

// ============================================================================
// Run state
// ============================================================================

/// States of a generation run.
///
/// `Init → ConfigChecked → ServiceResolved → ServiceWritten →
/// [InterfaceResolved → InterfaceWritten] → [TraitResolved → TraitWritten] → Done`,
/// with `Failed` as the alternative terminal state. A `*Written` state means
/// the artifact's write step finished, whatever its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStage {
    Init,
    ConfigChecked,
    ServiceResolved,
    ServiceWritten,
    InterfaceResolved,
    InterfaceWritten,
    TraitResolved,
    TraitWritten,
    Done,
    Failed,
}

impl GenerationStage {
    pub const fn resolved(kind: ArtifactKind) -> Self {
        match kind {
            ArtifactKind::Service => Self::ServiceResolved,
            ArtifactKind::Repository => Self::InterfaceResolved,
            ArtifactKind::Trait => Self::TraitResolved,
        }
    }

    pub const fn written(kind: ArtifactKind) -> Self {
        match kind {
            ArtifactKind::Service => Self::ServiceWritten,
            ArtifactKind::Repository => Self::InterfaceWritten,
            ArtifactKind::Trait => Self::TraitWritten,
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

// ============================================================================
// Plan
// ============================================================================

/// One file to render: which stub, where, and with which values.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePlan {
    pub stub: Stub,
    pub location: ArtifactLocation,
    pub context: TemplateContext,
}

/// Everything resolved for one artifact before anything is written.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArtifact {
    pub name: ResolvedName,
    pub file: FilePlan,
    /// Shared base file of the kind; `None` for traits.
    pub base: Option<FilePlan>,
}

/// Resolution result for one requested artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedArtifact {
    pub kind: ArtifactKind,
    pub resolution: Result<ResolvedArtifact, StubsmithError>,
}

/// Resolved artifacts of a run, in generation order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerationPlan {
    pub artifacts: Vec<PlannedArtifact>,
}

impl GenerationPlan {
    pub fn get(&self, kind: ArtifactKind) -> Option<&PlannedArtifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }
}

// ============================================================================
// Report
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Created,
    AlreadyExists,
    Failed,
}

/// What happened to a kind's shared base file during the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseFileOutcome {
    pub path: PathBuf,
    /// `false` when the file was already present and left untouched.
    pub created: bool,
}

/// Result of one artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactOutcome {
    pub kind: ArtifactKind,
    pub identifier: Option<String>,
    pub namespace: Option<String>,
    pub path: Option<PathBuf>,
    pub status: OutcomeStatus,
    pub base: Option<BaseFileOutcome>,
    pub directories_created: usize,
    pub message: Option<String>,
    #[serde(skip)]
    pub error: Option<StubsmithError>,
}

impl ArtifactOutcome {
    fn pending(kind: ArtifactKind) -> Self {
        Self {
            kind,
            identifier: None,
            namespace: None,
            path: None,
            status: OutcomeStatus::Failed,
            base: None,
            directories_created: 0,
            message: None,
            error: None,
        }
    }

    fn located(kind: ArtifactKind, file: &FilePlan, root: &Path) -> Self {
        Self {
            identifier: Some(file.location.identifier.clone()),
            namespace: Some(file.location.namespace_path.clone()),
            path: Some(file.location.file_under(root)),
            ..Self::pending(kind)
        }
    }

    fn with_status(mut self, status: OutcomeStatus, error: Option<StubsmithError>) -> Self {
        self.status = status;
        self.message = error.as_ref().map(ToString::to_string);
        self.error = error;
        self
    }

    fn failed(self, error: StubsmithError) -> Self {
        self.with_status(OutcomeStatus::Failed, Some(error))
    }

    pub fn is_created(&self) -> bool {
        self.status == OutcomeStatus::Created
    }
}

/// Aggregated outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub stages: Vec<GenerationStage>,
    pub artifacts: Vec<ArtifactOutcome>,
}

impl GenerationReport {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            stages: vec![GenerationStage::Init],
            artifacts: Vec::new(),
        }
    }

    fn advance(&mut self, stage: GenerationStage) {
        self.stages.push(stage);
    }

    /// Final state of the run.
    pub fn stage(&self) -> GenerationStage {
        self.stages.last().copied().unwrap_or(GenerationStage::Init)
    }

    pub fn outcome(&self, kind: ArtifactKind) -> Option<&ArtifactOutcome> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }

    pub fn created_count(&self) -> usize {
        self.artifacts.iter().filter(|a| a.is_created()).count()
    }

    pub fn collision_count(&self) -> usize {
        self.artifacts
            .iter()
            .filter(|a| a.status == OutcomeStatus::AlreadyExists)
            .count()
    }

    /// `true` if any artifact failed for a reason other than a collision.
    pub fn has_hard_failure(&self) -> bool {
        self.artifacts
            .iter()
            .any(|a| a.status == OutcomeStatus::Failed)
    }

    /// Base files written by this run.
    pub fn created_base_files(&self) -> impl Iterator<Item = &Path> {
        self.artifacts
            .iter()
            .filter_map(|a| a.base.as_ref())
            .filter(|b| b.created)
            .map(|b| b.path.as_path())
    }
}

// ============================================================================
// Service
// ============================================================================

/// Main generation service.
///
/// Orchestrates name resolution, directory materialization, rendering and
/// writing for one [`GenerationRequest`].
pub struct GenerateService {
    config: GeneratorConfig,
    stubs: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given configuration and adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stubsmith_core::application::GenerateService;
    ///
    /// let service = GenerateService::new(
    ///     config,     // GeneratorConfig
    ///     stubs,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        config: GeneratorConfig,
        stubs: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            config,
            stubs,
            renderer,
            filesystem,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Resolve every requested artifact without touching the filesystem.
    ///
    /// Fails only when configuration for a requested kind is missing; per
    /// artifact naming errors are carried in the plan.
    #[instrument(skip_all, fields(name = %request.base_name))]
    pub fn plan(&self, request: &GenerationRequest) -> StubsmithResult<GenerationPlan> {
        let missing = self.config.missing_keys(request.requested_kinds());
        if !missing.is_empty() {
            return Err(ApplicationError::ConfigMissing { keys: missing }.into());
        }

        let service = self.resolve(request, ArtifactKind::Service);
        let interface = request
            .wants(ArtifactKind::Repository)
            .then(|| self.resolve(request, ArtifactKind::Repository));
        let traits = request
            .wants(ArtifactKind::Trait)
            .then(|| self.resolve(request, ArtifactKind::Trait));

        // The service references its interface only when that resolved cleanly.
        let companion = interface
            .as_ref()
            .and_then(|r| r.as_ref().ok())
            .map(|(_, location)| location.clone());

        let mut plan = GenerationPlan::default();
        plan.artifacts.push(PlannedArtifact {
            kind: ArtifactKind::Service,
            resolution: service.and_then(|(name, location)| {
                self.assemble(ArtifactKind::Service, name, location, companion.as_ref())
            }),
        });

        for (kind, resolution) in [
            (ArtifactKind::Repository, interface),
            (ArtifactKind::Trait, traits),
        ] {
            if let Some(resolution) = resolution {
                plan.artifacts.push(PlannedArtifact {
                    kind,
                    resolution: resolution
                        .and_then(|(name, location)| self.assemble(kind, name, location, None)),
                });
            }
        }

        Ok(plan)
    }

    /// Generate every requested artifact under `root`.
    ///
    /// Returns `Err` only for missing configuration. Everything else is
    /// reported per artifact in the [`GenerationReport`].
    #[instrument(
        skip_all,
        fields(
            name = %request.base_name,
            root = %root.as_ref().display()
        )
    )]
    pub fn generate(
        &self,
        request: &GenerationRequest,
        root: impl AsRef<Path>,
    ) -> StubsmithResult<GenerationReport> {
        let root = root.as_ref();
        let mut report = GenerationReport::new(root);

        let plan = match self.plan(request) {
            Ok(plan) => plan,
            Err(e) => {
                error!(error = %e, "Configuration check failed, nothing generated");
                return Err(e);
            }
        };
        report.advance(GenerationStage::ConfigChecked);

        for planned in plan.artifacts {
            let kind = planned.kind;
            report.advance(GenerationStage::resolved(kind));

            let outcome = match planned.resolution {
                Ok(artifact) => self.write_artifact(kind, &artifact, root),
                Err(e) => ArtifactOutcome::pending(kind).failed(e),
            };
            log_outcome(&outcome);

            report.artifacts.push(outcome);
            report.advance(GenerationStage::written(kind));
        }

        report.advance(if report.has_hard_failure() {
            GenerationStage::Failed
        } else {
            GenerationStage::Done
        });

        info!(
            created = report.created_count(),
            collisions = report.collision_count(),
            "Generation finished"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn resolve(
        &self,
        request: &GenerationRequest,
        kind: ArtifactKind,
    ) -> StubsmithResult<(ResolvedName, ArtifactLocation)> {
        let name = NameTransformer::new(&self.config).resolve_in(
            kind,
            &request.base_name,
            request.name_override(kind),
            request.sub_directory.as_deref(),
        )?;
        let location = PathResolver::new(&self.config).resolve_location(kind, &name)?;
        Ok((name, location))
    }

    /// Attach stub choice, base file and template context to a resolved name.
    fn assemble(
        &self,
        kind: ArtifactKind,
        name: ResolvedName,
        location: ArtifactLocation,
        companion: Option<&ArtifactLocation>,
    ) -> StubsmithResult<ResolvedArtifact> {
        let base = PathResolver::new(&self.config)
            .base_location(kind)?
            .zip(kind.base_stub())
            .map(|(location, stub)| FilePlan {
                stub,
                context: TemplateContext::new()
                    .with("Namespace", &location.namespace_path)
                    .with("BaseName", &location.identifier),
                location,
            });

        let mut context = TemplateContext::new()
            .with("Namespace", &location.namespace_path)
            .with(kind.name_placeholder(), &name.identifier);
        if let Some(base) = &base {
            context.insert("BaseNamespace", &base.location.namespace_path);
            context.insert("BaseName", &base.location.identifier);
        }

        let stub = match (kind, companion) {
            (ArtifactKind::Service, Some(interface)) => {
                context.insert("InterfaceNamespace", &interface.namespace_path);
                context.insert("InterfaceName", &interface.identifier);
                Stub::ServiceImplementsInterface
            }
            (ArtifactKind::Service, None) => Stub::Service,
            (ArtifactKind::Repository, _) => Stub::Interface,
            (ArtifactKind::Trait, _) => Stub::Trait,
        };

        Ok(ResolvedArtifact {
            name,
            file: FilePlan {
                stub,
                location,
                context,
            },
            base,
        })
    }

    fn write_artifact(
        &self,
        kind: ArtifactKind,
        artifact: &ResolvedArtifact,
        root: &Path,
    ) -> ArtifactOutcome {
        let mut outcome = ArtifactOutcome::located(kind, &artifact.file, root);
        let materializer = DirectoryMaterializer::new(self.filesystem.as_ref());

        // Directory creation happens even if the write is later skipped.
        match materializer.ensure(&artifact.file.location.directory_under(root)) {
            Ok(created) => outcome.directories_created += created,
            Err(e) => return outcome.failed(e),
        }

        if let Some(base) = &artifact.base {
            match self.ensure_base_file(base, root, &materializer) {
                Ok((base_outcome, created)) => {
                    outcome.directories_created += created;
                    outcome.base = Some(base_outcome);
                }
                Err(e) => return outcome.failed(e),
            }
        }

        let path = artifact.file.location.file_under(root);
        if self.filesystem.exists(&path) {
            let collision = ApplicationError::AlreadyExists { kind, path }.into();
            return outcome.with_status(OutcomeStatus::AlreadyExists, Some(collision));
        }

        match self.render_to(&artifact.file, &path) {
            Ok(()) => outcome.with_status(OutcomeStatus::Created, None),
            Err(e) => outcome.failed(e),
        }
    }

    /// Create the base file once; an existing one is never overwritten.
    fn ensure_base_file(
        &self,
        base: &FilePlan,
        root: &Path,
        materializer: &DirectoryMaterializer<'_>,
    ) -> StubsmithResult<(BaseFileOutcome, usize)> {
        let directories = materializer.ensure(&base.location.directory_under(root))?;
        let path = base.location.file_under(root);

        if self.filesystem.exists(&path) {
            return Ok((
                BaseFileOutcome {
                    path,
                    created: false,
                },
                directories,
            ));
        }

        self.render_to(base, &path)?;
        info!(path = %path.display(), "Base file created");
        Ok((BaseFileOutcome { path, created: true }, directories))
    }

    fn render_to(&self, file: &FilePlan, path: &Path) -> StubsmithResult<()> {
        let text = self.stubs.get(file.stub)?;
        let rendered = self.renderer.render(&text, &file.context);
        self.filesystem.write_file(path, &rendered)
    }
}

fn log_outcome(outcome: &ArtifactOutcome) {
    let path = outcome
        .path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    match outcome.status {
        OutcomeStatus::Created => info!(kind = %outcome.kind, path = %path, "Artifact created"),
        OutcomeStatus::AlreadyExists => {
            warn!(kind = %outcome.kind, path = %path, "Artifact already exists, skipped")
        }
        OutcomeStatus::Failed => error!(
            kind = %outcome.kind,
            error = outcome.message.as_deref().unwrap_or_default(),
            "Artifact failed"
        ),
    }
}
