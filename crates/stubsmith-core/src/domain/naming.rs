//! Name transformation: raw user input → final identifiers per artifact kind.
//!
//! # Pipeline
//!
//! ```text
//! override? ─┐
//! raw name  ─┼─► pick source ─► lower-case (if case-insensitive) ─► studly
//! fallback  ─┘                                                       │
//!                      identifier ◄─ append suffix ◄─ pluralize? ◄───┘
//! ```
//!
//! The pluralized studly form before the suffix is kept as the *stem*.
//! Callers holding a stem but no raw name can pass it as the fallback.

use serde::Serialize;

use crate::domain::{
    entities::config::{GeneratorConfig, keys},
    error::DomainError,
    inflection,
    value_objects::ArtifactKind,
};

/// Output of [`NameTransformer`] for one artifact kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedName {
    /// Final identifier. Invariant: matches `^[A-Za-z][A-Za-z0-9]*$`.
    pub identifier: String,
    /// Studly, optionally pluralized name before the suffix.
    pub stem: String,
    /// Cased sub-directory segments the artifact lives under.
    pub directory_segments: Vec<String>,
}

/// Pure name transformation bound to one configuration.
#[derive(Debug, Clone, Copy)]
pub struct NameTransformer<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> NameTransformer<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Resolve the identifier for `kind`; a non-empty override wins over `raw`.
    pub fn resolve(
        &self,
        kind: ArtifactKind,
        raw: &str,
        override_name: Option<&str>,
    ) -> Result<ResolvedName, DomainError> {
        self.resolve_with_fallback(kind, raw, override_name, None)
    }

    /// Like [`Self::resolve`], falling back to `fallback` (an already
    /// resolved stem) when both the override and `raw` are blank.
    ///
    /// The generation workflow never needs this: a request whose base name
    /// is blank fails before any companion is named. It serves library
    /// callers that derive one artifact from another's stem.
    pub fn resolve_with_fallback(
        &self,
        kind: ArtifactKind,
        raw: &str,
        override_name: Option<&str>,
        fallback: Option<&str>,
    ) -> Result<ResolvedName, DomainError> {
        let kind_config =
            self.config
                .kind(kind)
                .ok_or_else(|| DomainError::InvalidConfigValue {
                    key: keys::directory(kind),
                    value: String::new(),
                    reason: format!("{kind} artifacts are not configured"),
                })?;

        let source = [override_name, Some(raw), fallback]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .ok_or_else(|| DomainError::InvalidName {
                name: raw.to_string(),
                reason: "name is empty".into(),
            })?;

        let mut stem = self.studly(source);
        if !is_identifier(&stem) {
            return Err(DomainError::InvalidName {
                name: source.to_string(),
                reason: "must contain only letters and digits and start with a letter".into(),
            });
        }

        if kind_config.pluralize_name {
            stem = inflection::pluralize(&stem);
        }

        let identifier = format!("{stem}{}", kind_config.name_suffix);
        if !is_identifier(&identifier) {
            return Err(DomainError::InvalidName {
                name: identifier,
                reason: format!(
                    "suffix '{}' produces an invalid identifier",
                    kind_config.name_suffix
                ),
            });
        }

        Ok(ResolvedName {
            identifier,
            stem,
            directory_segments: Vec::new(),
        })
    }

    /// Resolve and attach the sub-directory segments in one go.
    pub fn resolve_in(
        &self,
        kind: ArtifactKind,
        raw: &str,
        override_name: Option<&str>,
        sub_directory: Option<&str>,
    ) -> Result<ResolvedName, DomainError> {
        let mut name = self.resolve(kind, raw, override_name)?;
        name.directory_segments = self.directory_segments(sub_directory)?;
        Ok(name)
    }

    /// Case a slash-delimited sub-directory path into segments.
    ///
    /// Empty segments are discarded. Segments get the identifier casing and,
    /// when `subdirectory_to_plural` is set, pluralization. Never suffixed.
    pub fn directory_segments(
        &self,
        sub_directory: Option<&str>,
    ) -> Result<Vec<String>, DomainError> {
        let Some(path) = sub_directory else {
            return Ok(Vec::new());
        };

        path.split(['/', '\\'])
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let cased = self.studly(segment);
                if !is_identifier(&cased) {
                    return Err(DomainError::InvalidSubDirectory {
                        segment: segment.to_string(),
                        reason: "must contain only letters and digits and start with a letter"
                            .into(),
                    });
                }
                Ok(if self.config.pluralize_directories() {
                    inflection::pluralize(&cased)
                } else {
                    cased
                })
            })
            .collect()
    }

    /// Studly-case `input` honouring the case-sensitivity setting.
    ///
    /// Case-insensitive mode lower-cases everything first, so `inVoIce`,
    /// `INVOICE` and `invoice` all become `Invoice`. Case-sensitive mode keeps
    /// the inner letters: `orderItem` becomes `OrderItem`.
    pub fn studly(&self, input: &str) -> String {
        let input = if self.config.case_sensitive() {
            input.to_string()
        } else {
            input.to_lowercase()
        };

        input
            .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `^[A-Za-z][A-Za-z0-9]*$`
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}
