//! Domain value objects: ArtifactKind and Stub.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each enum carries its own string forms and the fixed facts attached to
//! it (config key prefix, base file, placeholder set). Adding a variant means
//! adding its arms here; nothing else in the domain matches on strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// One of the three categories of file the generator produces.
///
/// The variant order is the generation order: a service may reference its
/// interface, so it is always attempted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Service,
    Repository,
    Trait,
}

impl ArtifactKind {
    /// All kinds in generation order.
    pub const ALL: [ArtifactKind; 3] = [Self::Service, Self::Repository, Self::Trait];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Repository => "repository",
            Self::Trait => "trait",
        }
    }

    /// Human-facing label used in messages ("Interface generated").
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Repository => "Interface",
            Self::Trait => "Trait",
        }
    }

    /// Prefix of this kind's keys in the flat configuration mapping.
    pub const fn config_prefix(&self) -> &'static str {
        self.as_str()
    }

    /// Placeholder that receives this artifact's own identifier.
    pub const fn name_placeholder(&self) -> &'static str {
        match self {
            Self::Service => "ServiceName",
            Self::Repository => "InterfaceName",
            Self::Trait => "TraitName",
        }
    }

    /// Shared base file for this kind, if it has one.
    pub const fn base_stub(&self) -> Option<Stub> {
        match self {
            Self::Service => Some(Stub::BaseAbstract),
            Self::Repository => Some(Stub::BaseInterface),
            Self::Trait => None,
        }
    }

    /// Identifier of the shared base file.
    pub const fn base_name(&self) -> Option<&'static str> {
        match self {
            Self::Service => Some("BaseService"),
            Self::Repository => Some("BaseRepositoryInterface"),
            Self::Trait => None,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "service" => Ok(Self::Service),
            "repository" | "interface" => Ok(Self::Repository),
            "trait" => Ok(Self::Trait),
            other => Err(DomainError::InvalidConfigValue {
                key: "kind".into(),
                value: other.into(),
                reason: "expected one of: service, repository, trait".into(),
            }),
        }
    }
}

// ── Stub ─────────────────────────────────────────────────────────────────────

/// The fixed set of named templates.
///
/// Template text is opaque to the core; only the placeholder set is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stub {
    Service,
    ServiceImplementsInterface,
    Interface,
    BaseInterface,
    Trait,
    BaseAbstract,
}

impl Stub {
    pub const ALL: [Stub; 6] = [
        Self::Service,
        Self::ServiceImplementsInterface,
        Self::Interface,
        Self::BaseInterface,
        Self::Trait,
        Self::BaseAbstract,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::ServiceImplementsInterface => "service-implements-interface",
            Self::Interface => "interface",
            Self::BaseInterface => "base-interface",
            Self::Trait => "trait",
            Self::BaseAbstract => "base-abstract",
        }
    }

    /// File name of the stub inside a stub directory.
    pub fn file_name(&self) -> String {
        format!("{}.stub", self.as_str())
    }

    /// Placeholder tokens (without braces) the stub is rendered with.
    pub const fn placeholders(&self) -> &'static [&'static str] {
        match self {
            Self::Service => &["Namespace", "ServiceName", "BaseNamespace", "BaseName"],
            Self::ServiceImplementsInterface => &[
                "Namespace",
                "ServiceName",
                "BaseNamespace",
                "BaseName",
                "InterfaceNamespace",
                "InterfaceName",
            ],
            Self::Interface => &["Namespace", "InterfaceName", "BaseNamespace", "BaseName"],
            Self::BaseInterface | Self::BaseAbstract => &["Namespace", "BaseName"],
            Self::Trait => &["Namespace", "TraitName"],
        }
    }
}

impl fmt::Display for Stub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stub {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_suffix(".stub").unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|stub| stub.as_str() == name)
            .ok_or_else(|| DomainError::InvalidConfigValue {
                key: "stub".into(),
                value: s.into(),
                reason: "unknown stub name".into(),
            })
    }
}
