use crate::domain::value_objects::ArtifactKind;

/// Input to one generation run.
///
/// Constructed fresh per invocation. `base_name` is validated when it is
/// transformed, so a blank name fails the service artifact only and leaves
/// artifacts with their own override untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    pub base_name: String,
    pub want_interface: bool,
    pub interface_name_override: Option<String>,
    pub want_trait: bool,
    pub trait_name_override: Option<String>,
    /// Slash-delimited nested directory, e.g. `billing/invoices`.
    pub sub_directory: Option<String>,
}

impl GenerationRequest {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            ..Self::default()
        }
    }

    /// Request the repository interface, optionally with a custom name.
    pub fn with_interface(mut self, name: Option<String>) -> Self {
        self.want_interface = true;
        self.interface_name_override = name;
        self
    }

    /// Request the trait, optionally with a custom name.
    pub fn with_trait(mut self, name: Option<String>) -> Self {
        self.want_trait = true;
        self.trait_name_override = name;
        self
    }

    pub fn in_sub_directory(mut self, path: impl Into<String>) -> Self {
        self.sub_directory = Some(path.into());
        self
    }

    /// Kinds this request generates, in generation order.
    pub fn requested_kinds(&self) -> Vec<ArtifactKind> {
        ArtifactKind::ALL
            .into_iter()
            .filter(|kind| self.wants(*kind))
            .collect()
    }

    pub fn wants(&self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::Service => true,
            ArtifactKind::Repository => self.want_interface,
            ArtifactKind::Trait => self.want_trait,
        }
    }

    /// User-supplied custom name for a kind, if any.
    pub fn name_override(&self, kind: ArtifactKind) -> Option<&str> {
        match kind {
            ArtifactKind::Service => None,
            ArtifactKind::Repository => self.interface_name_override.as_deref(),
            ArtifactKind::Trait => self.trait_name_override.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_is_always_requested_first() {
        let request = GenerationRequest::new("order")
            .with_trait(None)
            .with_interface(Some("Purchase".into()));

        assert_eq!(
            request.requested_kinds(),
            vec![
                ArtifactKind::Service,
                ArtifactKind::Repository,
                ArtifactKind::Trait
            ]
        );
        assert_eq!(request.name_override(ArtifactKind::Repository), Some("Purchase"));
        assert_eq!(request.name_override(ArtifactKind::Trait), None);
    }

    #[test]
    fn bare_request_is_service_only() {
        assert_eq!(
            GenerationRequest::new("order").requested_kinds(),
            vec![ArtifactKind::Service]
        );
    }
}
