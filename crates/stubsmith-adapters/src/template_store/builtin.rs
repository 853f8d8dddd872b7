//! In-memory stub store seeded with the stubs shipped in the binary.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use stubsmith_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::Stub,
    error::StubsmithResult,
};

/// Text of a built-in stub.
pub const fn embedded(stub: Stub) -> &'static str {
    match stub {
        Stub::Service => include_str!("../../stubs/service.stub"),
        Stub::ServiceImplementsInterface => {
            include_str!("../../stubs/service-implements-interface.stub")
        }
        Stub::Interface => include_str!("../../stubs/interface.stub"),
        Stub::BaseInterface => include_str!("../../stubs/base-interface.stub"),
        Stub::Trait => include_str!("../../stubs/trait.stub"),
        Stub::BaseAbstract => include_str!("../../stubs/base-abstract.stub"),
    }
}

/// Thread-safe in-memory stub store.
#[derive(Debug, Clone)]
pub struct BuiltinStubs {
    inner: Arc<RwLock<HashMap<Stub, String>>>,
}

impl BuiltinStubs {
    /// Create a store holding every built-in stub.
    pub fn new() -> Self {
        let stubs = Stub::ALL
            .into_iter()
            .map(|stub| (stub, embedded(stub).to_string()))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(stubs)),
        }
    }

    /// Create a store with no stubs at all.
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Replace the text of one stub.
    pub fn insert(&self, stub: Stub, text: impl Into<String>) -> StubsmithResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(stub, text.into());
        Ok(())
    }

    /// Get the number of stubs.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or_default()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BuiltinStubs {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for BuiltinStubs {
    fn get(&self, stub: Stub) -> StubsmithResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(&stub)
            .cloned()
            .ok_or_else(|| ApplicationError::StubNotFound { stub }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_uses_exactly_its_placeholders() {
        for stub in Stub::ALL {
            let text = embedded(stub);
            for placeholder in stub.placeholders() {
                assert!(
                    text.contains(&format!("{{{{{placeholder}}}}}")),
                    "{stub} is missing {{{{{placeholder}}}}}"
                );
            }

            let tokens = text.matches("{{").count();
            let known: usize = stub
                .placeholders()
                .iter()
                .map(|p| text.matches(&format!("{{{{{p}}}}}")).count())
                .sum();
            assert_eq!(tokens, known, "{stub} has unknown placeholders");
        }
    }

    #[test]
    fn service_with_interface_implements_it() {
        assert!(
            embedded(Stub::ServiceImplementsInterface).contains("implements {{InterfaceName}}")
        );
        assert!(!embedded(Stub::Service).contains("implements"));
    }

    #[test]
    fn empty_store_reports_missing_stub() {
        let store = BuiltinStubs::empty();
        assert!(store.is_empty());
        let err = store.get(Stub::Trait).unwrap_err();
        assert!(err.to_string().contains("Stub not found: trait"));
    }

    #[test]
    fn insert_replaces_text() {
        let store = BuiltinStubs::new();
        assert_eq!(store.len(), Stub::ALL.len());
        store.insert(Stub::Trait, "custom").unwrap();
        assert_eq!(store.get(Stub::Trait).unwrap(), "custom");
    }
}
