//! Path resolution: where an artifact lives and which namespace it declares.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    entities::config::{GeneratorConfig, KindConfig, keys},
    error::DomainError,
    naming::ResolvedName,
    value_objects::ArtifactKind,
};

/// Sub-directory holding the shared base file of a kind.
pub const BASE_DIRECTORY: &str = "Base";

/// Resolved on-disk location and namespace of one artifact.
///
/// `directory_path` is relative to the output root and always uses `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactLocation {
    pub identifier: String,
    pub directory_path: String,
    pub namespace_path: String,
    /// Invariant: `identifier + "." + extension`.
    pub file_name: String,
}

impl ArtifactLocation {
    /// Relative file path, `/`-separated.
    pub fn file_path(&self) -> String {
        format!("{}/{}", self.directory_path, self.file_name)
    }

    /// Absolute (or root-relative) directory under `root`.
    pub fn directory_under(&self, root: &Path) -> PathBuf {
        self.directory_path
            .split('/')
            .fold(root.to_path_buf(), |path, segment| path.join(segment))
    }

    /// Full file path under `root`.
    pub fn file_under(&self, root: &Path) -> PathBuf {
        self.directory_under(root).join(&self.file_name)
    }
}

/// Derives artifact directories and namespaces from configuration.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> PathResolver<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Location of an artifact whose name (and segments) are already resolved.
    ///
    /// With no segments the directory is exactly the kind's configured
    /// directory; otherwise segments are appended with `/`.
    pub fn resolve_location(
        &self,
        kind: ArtifactKind,
        name: &ResolvedName,
    ) -> Result<ArtifactLocation, DomainError> {
        let kind_config = self.kind_config(kind)?;

        let directory_path = std::iter::once(kind_config.directory_name.as_str())
            .chain(name.directory_segments.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("/");

        Ok(self.location(&name.identifier, directory_path))
    }

    /// Location of the shared base file of `kind`, if the kind has one.
    pub fn base_location(
        &self,
        kind: ArtifactKind,
    ) -> Result<Option<ArtifactLocation>, DomainError> {
        let Some(base_name) = kind.base_name() else {
            return Ok(None);
        };
        let kind_config = self.kind_config(kind)?;
        let directory_path = format!("{}/{BASE_DIRECTORY}", kind_config.directory_name);

        Ok(Some(self.location(base_name, directory_path)))
    }

    /// Namespace for a `/`-separated directory path, prefixed with the
    /// application namespace when one is configured.
    pub fn namespace_for(&self, directory_path: &str) -> String {
        let separator = self.config.namespace_separator();
        let app = self.config.application_namespace();

        std::iter::once(app)
            .filter(|ns| !ns.is_empty())
            .chain(directory_path.split(['/', '\\']).filter(|s| !s.is_empty()))
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn location(&self, identifier: &str, directory_path: String) -> ArtifactLocation {
        ArtifactLocation {
            identifier: identifier.to_string(),
            namespace_path: self.namespace_for(&directory_path),
            file_name: format!("{identifier}.{}", self.config.file_extension()),
            directory_path,
        }
    }

    fn kind_config(&self, kind: ArtifactKind) -> Result<&'a KindConfig, DomainError> {
        self.config
            .kind(kind)
            .ok_or_else(|| DomainError::InvalidConfigValue {
                key: keys::directory(kind),
                value: String::new(),
                reason: format!("{kind} artifacts are not configured"),
            })
    }
}
