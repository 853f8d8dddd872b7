use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::ArtifactKind};

/// Keys of the flat configuration mapping that are not per-kind.
pub mod keys {
    pub const CASE_SENSITIVE: &str = "case_sensitive";
    pub const SUBDIRECTORY_TO_PLURAL: &str = "subdirectory_to_plural";
    pub const APPLICATION_NAMESPACE: &str = "application_namespace";
    pub const NAMESPACE_SEPARATOR: &str = "namespace_separator";
    pub const FILE_EXTENSION: &str = "file_extension";

    /// `<kind>_directory`
    pub fn directory(kind: crate::domain::ArtifactKind) -> String {
        format!("{}_directory", kind.config_prefix())
    }

    /// `<kind>_append`
    pub fn append(kind: crate::domain::ArtifactKind) -> String {
        format!("{}_append", kind.config_prefix())
    }

    /// `<kind>_to_plural`
    pub fn to_plural(kind: crate::domain::ArtifactKind) -> String {
        format!("{}_to_plural", kind.config_prefix())
    }
}

/// Per-kind configuration sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindConfig {
    /// Base directory of this kind, relative to the output root.
    /// Invariant: non-empty, no trailing separator.
    pub directory_name: String,
    /// Literal suffix appended after casing and pluralization.
    pub name_suffix: String,
    pub pluralize_name: bool,
}

impl KindConfig {
    pub fn new(directory_name: impl Into<String>) -> Self {
        Self {
            directory_name: trim_separators(&directory_name.into()).to_string(),
            name_suffix: String::new(),
            pluralize_name: false,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.name_suffix = suffix.into();
        self
    }

    pub fn pluralized(mut self, pluralize: bool) -> Self {
        self.pluralize_name = pluralize;
        self
    }
}

/// Process-wide generator configuration, read-only during a run.
///
/// A kind whose `<kind>_directory` key is absent is simply not configured;
/// whether that is fatal depends on what the run asks for, see
/// [`GeneratorConfig::missing_keys`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorConfig {
    kinds: BTreeMap<ArtifactKind, KindConfig>,
    case_sensitive: bool,
    pluralize_directories: bool,
    application_namespace: String,
    namespace_separator: String,
    file_extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            kinds: BTreeMap::new(),
            case_sensitive: true,
            pluralize_directories: false,
            application_namespace: String::new(),
            namespace_separator: "\\".into(),
            file_extension: "php".into(),
        }
    }
}

impl GeneratorConfig {
    /// Build from a flat key/value mapping.
    ///
    /// Only value *format* is checked here. Absent directory keys leave the
    /// kind unconfigured.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, DomainError> {
        let mut config = Self::default();

        for kind in ArtifactKind::ALL {
            let Some(directory) = non_empty(map.get(&keys::directory(kind))) else {
                continue;
            };
            if trim_separators(directory).is_empty() {
                continue;
            }

            let suffix = map
                .get(&keys::append(kind))
                .map(|s| s.trim().to_string())
                .unwrap_or_default();
            let plural = parse_flag(map, &keys::to_plural(kind))?.unwrap_or(false);

            config.kinds.insert(
                kind,
                KindConfig::new(directory.trim())
                    .with_suffix(suffix)
                    .pluralized(plural),
            );
        }

        if let Some(flag) = parse_flag(map, keys::CASE_SENSITIVE)? {
            config.case_sensitive = flag;
        }
        if let Some(flag) = parse_flag(map, keys::SUBDIRECTORY_TO_PLURAL)? {
            config.pluralize_directories = flag;
        }
        if let Some(ns) = map.get(keys::APPLICATION_NAMESPACE) {
            config.application_namespace = ns.trim().to_string();
        }
        if let Some(sep) = non_empty(map.get(keys::NAMESPACE_SEPARATOR)) {
            config.namespace_separator = sep.to_string();
        }
        if let Some(ext) = non_empty(map.get(keys::FILE_EXTENSION)) {
            config.file_extension = ext.trim().trim_start_matches('.').to_string();
        }

        // Trailing separators on the namespace would double up when joined.
        let sep = config.namespace_separator.clone();
        config.application_namespace = config
            .application_namespace
            .trim_end_matches(sep.as_str())
            .to_string();

        Ok(config)
    }

    /// Convenience constructor from string pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::from_map(&map)
    }

    pub fn with_kind(mut self, kind: ArtifactKind, config: KindConfig) -> Self {
        self.kinds.insert(kind, config);
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_application_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.application_namespace = namespace.into();
        self
    }

    /// Configuration keys that must be present for the given kinds but are not.
    pub fn missing_keys(&self, kinds: impl IntoIterator<Item = ArtifactKind>) -> Vec<String> {
        kinds
            .into_iter()
            .filter(|kind| !self.kinds.contains_key(kind))
            .map(keys::directory)
            .collect()
    }

    pub fn kind(&self, kind: ArtifactKind) -> Option<&KindConfig> {
        self.kinds.get(&kind)
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn pluralize_directories(&self) -> bool {
        self.pluralize_directories
    }

    pub fn application_namespace(&self) -> &str {
        &self.application_namespace
    }

    pub fn namespace_separator(&self) -> &str {
        &self.namespace_separator
    }

    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.as_str()).filter(|v| !v.trim().is_empty())
}

fn trim_separators(path: &str) -> &str {
    path.trim_end_matches(['/', '\\'])
}

fn parse_flag(map: &BTreeMap<String, String>, key: &str) -> Result<Option<bool>, DomainError> {
    let Some(raw) = non_empty(map.get(key)) else {
        return Ok(None);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(DomainError::InvalidConfigValue {
            key: key.into(),
            value: raw.into(),
            reason: "expected a boolean".into(),
        }),
    }
}
