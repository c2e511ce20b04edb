//! Registry of discovered service names.

use apigen_core::ServiceName;
use indexmap::IndexMap;

/// Ordered, deduplicated set of discovered services.
///
/// Iteration follows first-discovery order so that generated artifacts are
/// byte-stable across runs with unchanged inputs. The registry only grows:
/// names are never removed for the lifetime of a session.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    // Key order is the discovery order; the value is the declared type name.
    types: IndexMap<ServiceName, String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` unless it is already registered.
    ///
    /// Returns whether an insertion occurred.
    pub fn add_if_absent(&mut self, name: ServiceName) -> bool {
        if self.types.contains_key(&name) {
            return false;
        }
        // A service's declared interface type shares its class name.
        let ty = name.as_str().to_string();
        self.types.insert(name, ty);
        true
    }

    /// Merge every name, returning the ones that were new.
    pub fn extend(&mut self, names: impl IntoIterator<Item = ServiceName>) -> Vec<ServiceName> {
        names
            .into_iter()
            .filter(|name| self.add_if_absent(name.clone()))
            .collect()
    }

    /// Names in first-discovery order.
    pub fn names_in_order(&self) -> impl ExactSizeIterator<Item = &ServiceName> {
        self.types.keys()
    }

    /// Mapping from service name to its declared type name.
    pub fn type_mapping(&self) -> &IndexMap<ServiceName, String> {
        &self.types
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
