//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the flat `[generator]`
//! mapping, converted into a `GeneratorConfig`.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STUBSMITH_<TABLE>__<KEY>`,
//!    e.g. `STUBSMITH_GENERATOR__SERVICE_DIRECTORY=Services`
//! 3. Config file: `--config`, else `./stubsmith.toml`, else the platform
//!    config directory
//! 4. Built-in defaults (paths and output only; generator keys have none)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stubsmith_core::domain::{GeneratorConfig, keys};

use crate::error::{CliError, CliResult};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "stubsmith.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Flat key/value mapping handed to the generator.
    #[serde(default)]
    pub generator: BTreeMap<String, toml::Value>,
    /// Where files are written and stubs are read from.
    #[serde(default)]
    pub paths: PathsConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// File this configuration was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stubs: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            stubs: None,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("app")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicitly passed `config_file` must exist; the implicit locations
    /// are optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let source = match config_file {
            Some(path) if !path.is_file() => {
                return Err(CliError::ConfigError {
                    message: format!("Config file not found: {}", path.display()),
                    source: None,
                });
            }
            Some(path) => Some(path.clone()),
            None => Self::discover(),
        };

        let mut builder = Config::builder();
        if let Some(path) = &source {
            debug!(path = %path.display(), "Reading configuration file");
            builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
        }
        builder = builder.add_source(
            Environment::with_prefix("STUBSMITH")
                .prefix_separator("_")
                .separator("__"),
        );

        let mut config: Self = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to load configuration: {e}"),
                source: Some(Box::new(e)),
            })?;
        config.source = source;
        Ok(config)
    }

    /// First existing implicit config file.
    fn discover() -> Option<PathBuf> {
        [PathBuf::from(LOCAL_CONFIG_FILE), Self::config_path()]
            .into_iter()
            .find(|p| p.is_file())
    }

    /// Path to the default (global) configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `stubsmith.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stubsmith", "stubsmith")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Path of the file in use, or where `init` would write one.
    pub fn active_path(&self) -> PathBuf {
        self.source.clone().unwrap_or_else(Self::config_path)
    }

    /// Configuration written by `stubsmith init`.
    pub fn starter() -> Self {
        let string = |s: &str| toml::Value::String(s.into());
        let flag = toml::Value::Boolean;

        let generator = BTreeMap::from([
            ("service_directory".to_string(), string("Services")),
            ("service_append".to_string(), string("")),
            ("service_to_plural".to_string(), flag(false)),
            ("repository_directory".to_string(), string("Repositories")),
            ("repository_append".to_string(), string("RepositoryInterface")),
            ("repository_to_plural".to_string(), flag(true)),
            ("trait_directory".to_string(), string("Traits")),
            ("trait_append".to_string(), string("")),
            ("trait_to_plural".to_string(), flag(false)),
            (keys::CASE_SENSITIVE.to_string(), flag(true)),
            (keys::SUBDIRECTORY_TO_PLURAL.to_string(), flag(false)),
            (keys::APPLICATION_NAMESPACE.to_string(), string("App")),
            (keys::FILE_EXTENSION.to_string(), string("php")),
        ]);

        Self {
            generator,
            ..Self::default()
        }
    }

    /// The `[generator]` table as plain strings.
    pub fn generator_map(&self) -> BTreeMap<String, String> {
        self.generator
            .iter()
            .map(|(key, value)| (key.to_lowercase(), value_to_string(value)))
            .collect()
    }

    /// Build the core generator configuration.
    pub fn generator_config(&self) -> CliResult<GeneratorConfig> {
        GeneratorConfig::from_map(&self.generator_map())
            .map_err(|e| CliError::Core(e.into()))
    }

    /// Look up a dotted key such as `paths.root`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = serde_json::to_value(self).ok()?;
        let found = key
            .split('.')
            .try_fold(&value, |node, segment| node.get(segment))?;

        Some(match found {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Output root, letting `flag` win.
    pub fn root(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .unwrap_or_else(|| self.paths.root.clone())
    }
}

fn value_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_root_is_app() {
        assert_eq!(AppConfig::default().paths.root, PathBuf::from("app"));
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn starter_builds_a_complete_generator_config() {
        let generator = AppConfig::starter().generator_config().unwrap();
        assert!(generator.case_sensitive());
        assert_eq!(generator.application_namespace(), "App");
        assert!(
            generator
                .missing_keys(stubsmith_core::domain::ArtifactKind::ALL)
                .is_empty()
        );
    }

    #[test]
    fn booleans_are_flattened_to_strings() {
        let map = AppConfig::starter().generator_map();
        assert_eq!(map["repository_to_plural"], "true");
        assert_eq!(map["service_directory"], "Services");
    }

    #[test]
    fn get_reads_nested_keys() {
        let cfg = AppConfig::starter();
        assert_eq!(cfg.get("paths.root").as_deref(), Some("app"));
        assert_eq!(cfg.get("generator.service_directory").as_deref(), Some("Services"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("does.not.exist"), None);
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[generator]\nservice_directory = \"Domain\"\nservice_to_plural = true\n\n[paths]\nroot = \"src\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.paths.root, PathBuf::from("src"));
        assert_eq!(cfg.generator_map()["service_to_plural"], "true");
        assert_eq!(cfg.active_path(), path);
    }

    #[test]
    fn load_missing_explicit_file_is_config_error() {
        let err = AppConfig::load(Some(&PathBuf::from("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn root_flag_wins() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.root(Some(Path::new("src"))), PathBuf::from("src"));
        assert_eq!(cfg.root(None), PathBuf::from("app"));
    }
}
