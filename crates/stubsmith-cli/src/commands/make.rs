//! Implementation of the `stubsmith make` command.
//!
//! Translates CLI arguments into a `GenerationRequest`, wires the adapters
//! into a `GenerateService` and reports the per-artifact outcome. No naming
//! or path logic lives here.

use std::path::Path;

use serde_json::json;
use tracing::{debug, info, instrument};

use stubsmith_adapters::{BuiltinStubs, DirectoryStubStore, LocalFilesystem, SimpleRenderer};
use stubsmith_core::{
    application::{
        ArtifactOutcome, GenerateService, GenerationPlan, GenerationReport, OutcomeStatus,
        ports::TemplateStore,
    },
    domain::GenerationRequest,
};

use crate::{
    cli::MakeArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stubsmith make` command.
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: MakeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(&args);
    let root = config.root(args.root.as_deref());
    let service = build_service(&args, &config)?;

    debug!(
        kinds = ?request.requested_kinds(),
        root = %root.display(),
        "Request built"
    );

    if args.dry_run {
        let plan = service.plan(&request)?;
        return show_plan(&plan, &root, &output);
    }

    let report = service.generate(&request, &root)?;
    show_report(&report, &output)?;
    exit_status(&report)
}

/// Map CLI flags onto a request. A bare `--interface` / `--trait` arrives as
/// an empty string and means "derive the name".
fn build_request(args: &MakeArgs) -> GenerationRequest {
    let custom = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };

    let mut request = GenerationRequest::new(args.name.clone());
    if args.interface.is_some() {
        request = request.with_interface(custom(&args.interface));
    }
    if args.trait_name.is_some() {
        request = request.with_trait(custom(&args.trait_name));
    }
    if let Some(dir) = &args.dir {
        request = request.in_sub_directory(dir.clone());
    }
    request
}

fn build_service(args: &MakeArgs, config: &AppConfig) -> CliResult<GenerateService> {
    let generator = config.generator_config()?;

    let stubs_dir = args.stubs.clone().or_else(|| config.paths.stubs.clone());
    let stubs: Box<dyn TemplateStore> = match stubs_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "Reading stub overrides");
            Box::new(DirectoryStubStore::new(Box::new(LocalFilesystem::new()), dir))
        }
        None => Box::new(BuiltinStubs::new()),
    };

    Ok(GenerateService::new(
        generator,
        stubs,
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    ))
}

// ── display ───────────────────────────────────────────────────────────────────

fn show_plan(plan: &GenerationPlan, root: &Path, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let artifacts: Vec<_> = plan
            .artifacts
            .iter()
            .map(|planned| match &planned.resolution {
                Ok(resolved) => json!({
                    "kind": planned.kind,
                    "identifier": resolved.file.location.identifier,
                    "namespace": resolved.file.location.namespace_path,
                    "path": resolved.file.location.file_under(root),
                    "base": resolved.base.as_ref().map(|b| b.location.file_under(root)),
                }),
                Err(e) => json!({
                    "kind": planned.kind,
                    "error": e.to_string(),
                }),
            })
            .collect();
        output.json(&json!({ "dry_run": true, "root": root, "artifacts": artifacts }))?;
        return Ok(());
    }

    output.header(&format!("Dry run: nothing will be written under {}", root.display()))?;
    for planned in &plan.artifacts {
        let label = planned.kind.label();
        match &planned.resolution {
            Ok(resolved) => {
                let location = &resolved.file.location;
                output.info(&format!(
                    "{label} {} -> {}",
                    location.identifier,
                    location.file_under(root).display()
                ))?;
                output.print(&format!("    namespace {}", location.namespace_path))?;
                if let Some(base) = &resolved.base {
                    output.print(&format!(
                        "    base      {}",
                        base.location.file_under(root).display()
                    ))?;
                }
            }
            Err(e) => output.error(&format!("{label}: {e}"))?,
        }
    }
    Ok(())
}

fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    for base in report.created_base_files() {
        output.info(&format!("Base file created: {}", base.display()))?;
    }

    for outcome in &report.artifacts {
        let label = outcome.kind.label();
        let path = display_path(outcome);
        match outcome.status {
            OutcomeStatus::Created => {
                output.success(&format!("{label} generated: {path}"))?;
            }
            OutcomeStatus::AlreadyExists => {
                output.warning(&format!("{label} already exists: {path}"))?;
            }
            OutcomeStatus::Failed => {
                let reason = outcome.message.as_deref().unwrap_or("unknown error");
                output.error(&format!("{label} failed: {reason}"))?;
            }
        }
    }

    info!(
        created = report.created_count(),
        collisions = report.collision_count(),
        stage = ?report.stage(),
        "Generation finished"
    );
    Ok(())
}

fn display_path(outcome: &ArtifactOutcome) -> String {
    outcome
        .path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".into())
}

// ── exit status ───────────────────────────────────────────────────────────────

/// Turn a finished report into the command's result.
///
/// Hard per-artifact failures exit 1 once every artifact was attempted.
/// Collisions only fail the run when nothing at all was created.
fn exit_status(report: &GenerationReport) -> CliResult<()> {
    let created = report.created_count();

    if report.has_hard_failure() {
        return Err(CliError::ArtifactsFailed {
            failed: report
                .artifacts
                .iter()
                .filter(|a| a.status == OutcomeStatus::Failed)
                .count(),
            created,
        });
    }

    if created == 0 && report.collision_count() > 0 {
        return Err(CliError::AlreadyExists {
            paths: report
                .artifacts
                .iter()
                .filter_map(|a| a.path.clone())
                .collect(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(name: &str) -> MakeArgs {
        MakeArgs {
            name: name.into(),
            interface: None,
            trait_name: None,
            dir: None,
            root: None,
            stubs: None,
            dry_run: false,
        }
    }

    #[test]
    fn plain_make_requests_only_the_service() {
        let request = build_request(&args("invoice"));
        assert_eq!(request.base_name, "invoice");
        assert!(!request.want_interface);
        assert!(!request.want_trait);
    }

    #[test]
    fn bare_flags_request_derived_names() {
        let mut a = args("invoice");
        a.interface = Some(String::new());
        a.trait_name = Some("  ".into());
        let request = build_request(&a);
        assert!(request.want_interface);
        assert!(request.want_trait);
        assert_eq!(request.interface_name_override, None);
        assert_eq!(request.trait_name_override, None);
    }

    #[test]
    fn custom_names_and_dir_are_passed_through() {
        let mut a = args("invoice");
        a.interface = Some("Billable".into());
        a.dir = Some("billing".into());
        let request = build_request(&a);
        assert_eq!(request.interface_name_override.as_deref(), Some("Billable"));
        assert_eq!(request.sub_directory.as_deref(), Some("billing"));
    }

    #[test]
    fn empty_report_is_success() {
        let report = GenerationReport {
            root: PathBuf::from("app"),
            stages: vec![],
            artifacts: vec![],
        };
        assert!(exit_status(&report).is_ok());
    }
}
