// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stubsmith.
//!
//! This module contains pure naming, path and templating logic with no I/O.
//! Filesystem access and stub storage are handled via ports (traits) defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No ambient state**: the application namespace is configuration, not a lookup
//! - **Deterministic**: identical inputs always resolve to identical names and paths
//!
pub mod entities;
pub mod error;
pub mod inflection;
pub mod naming;
pub mod paths;
pub mod value_objects;

pub use entities::{GenerationRequest, GeneratorConfig, KindConfig, TemplateContext, config::keys};
pub use error::DomainError;
pub use naming::{NameTransformer, ResolvedName};
pub use paths::{ArtifactLocation, BASE_DIRECTORY, PathResolver};
pub use value_objects::{ArtifactKind, Stub};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn artifact_kind_parses_correctly() {
        assert_eq!(ArtifactKind::from_str("service").unwrap(), ArtifactKind::Service);
        assert_eq!(ArtifactKind::from_str("Interface").unwrap(), ArtifactKind::Repository);
        assert!(ArtifactKind::from_str("controller").is_err());
    }

    #[test]
    fn artifact_kinds_are_in_generation_order() {
        let mut sorted = ArtifactKind::ALL;
        sorted.sort();
        assert_eq!(sorted, ArtifactKind::ALL);
        assert_eq!(ArtifactKind::ALL[0], ArtifactKind::Service);
    }

    #[test]
    fn only_trait_has_no_base_file() {
        assert_eq!(ArtifactKind::Service.base_stub(), Some(Stub::BaseAbstract));
        assert_eq!(ArtifactKind::Repository.base_stub(), Some(Stub::BaseInterface));
        assert_eq!(ArtifactKind::Trait.base_stub(), None);
    }

    #[test]
    fn stub_names_round_trip_through_file_names() {
        for stub in Stub::ALL {
            assert_eq!(Stub::from_str(&stub.file_name()).unwrap(), stub);
        }
        assert!(Stub::from_str("controller.stub").is_err());
    }

    #[test]
    fn service_with_interface_stub_extends_service_placeholders() {
        let plain = Stub::Service.placeholders();
        let with = Stub::ServiceImplementsInterface.placeholders();
        assert!(plain.iter().all(|p| with.contains(p)));
        assert!(with.contains(&"InterfaceName"));
    }

    // ========================================================================
    // Naming + Paths
    // ========================================================================

    #[test]
    fn invoice_in_billing_resolves_like_the_reference_layout() {
        let config = GeneratorConfig::from_pairs([
            ("service_directory", "Services"),
            ("service_append", ""),
            ("service_to_plural", "false"),
            ("repository_directory", "Repositories"),
            ("repository_append", "RepositoryInterface"),
            ("repository_to_plural", "true"),
            ("case_sensitive", "true"),
        ])
        .unwrap();
        let names = NameTransformer::new(&config);
        let paths = PathResolver::new(&config);

        let service = names
            .resolve_in(ArtifactKind::Service, "invoice", None, Some("billing"))
            .unwrap();
        let service_location = paths.resolve_location(ArtifactKind::Service, &service).unwrap();
        assert_eq!(service_location.file_path(), "Services/Billing/Invoice.php");
        assert_eq!(service_location.namespace_path, "Services\\Billing");

        let interface = names
            .resolve_in(ArtifactKind::Repository, "invoice", None, Some("billing"))
            .unwrap();
        let interface_location = paths
            .resolve_location(ArtifactKind::Repository, &interface)
            .unwrap();
        assert_eq!(
            interface_location.file_path(),
            "Repositories/Billing/InvoicesRepositoryInterface.php"
        );
    }
}
