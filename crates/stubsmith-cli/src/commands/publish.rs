//! `stubsmith publish`: copy the built-in stubs out for customisation.

use std::path::PathBuf;

use tracing::instrument;

use stubsmith_adapters::{BuiltinStubs, LocalFilesystem};
use stubsmith_core::application::{PublishStatus, StubService};

use crate::{cli::PublishArgs, config::AppConfig, error::CliResult, output::OutputManager};

const DEFAULT_STUBS_DIR: &str = "stubs";

#[instrument(skip_all)]
pub fn execute(args: PublishArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let directory = target_dir(args.dir, &config);
    let service = StubService::new(
        Box::new(BuiltinStubs::new()),
        Box::new(LocalFilesystem::new()),
    );

    let published = service.publish(&directory, args.force)?;

    if output.is_json() {
        output.json(&published)?;
        return Ok(());
    }

    for stub in &published {
        let path = stub.path.display();
        match stub.status {
            PublishStatus::Written => output.success(&format!("Published {path}"))?,
            PublishStatus::Overwritten => output.success(&format!("Overwrote {path}"))?,
            PublishStatus::Skipped => {
                output.warning(&format!("Skipped {path} (exists, use --force)"))?
            }
        }
    }

    let written = published
        .iter()
        .filter(|s| s.status != PublishStatus::Skipped)
        .count();
    output.info(&format!(
        "{written} of {} stubs published to {}",
        published.len(),
        directory.display()
    ))?;
    Ok(())
}

fn target_dir(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.or_else(|| config.paths.stubs.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STUBS_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_then_config_then_default() {
        let mut config = AppConfig::default();
        assert_eq!(target_dir(None, &config), PathBuf::from("stubs"));

        config.paths.stubs = Some(PathBuf::from("resources/stubs"));
        assert_eq!(target_dir(None, &config), PathBuf::from("resources/stubs"));
        assert_eq!(
            target_dir(Some(PathBuf::from("custom")), &config),
            PathBuf::from("custom")
        );
    }
}
