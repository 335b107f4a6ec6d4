use std::sync::Arc;

use levelguard_core::CapabilityName;

use crate::Capability;

/// Fixed-at-startup, ordered collection of system capabilities.
///
/// The registry is assembled once during boot from collaborator-owned
/// capability implementations; it is never mutated afterwards.
#[derive(Clone, Default)]
pub struct CapabilityRegistry {
    capabilities: Vec<Arc<dyn Capability>>,
}

impl CapabilityRegistry {
    /// Creates a registry over an ordered capability collection.
    #[must_use]
    pub fn new(capabilities: Vec<Arc<dyn Capability>>) -> Self {
        Self { capabilities }
    }

    /// Iterates capabilities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Capability>> {
        self.capabilities.iter()
    }

    /// Returns whether a capability name is registered.
    #[must_use]
    pub fn contains(&self, name: &CapabilityName) -> bool {
        self.capabilities
            .iter()
            .any(|capability| capability.name() == name)
    }

    /// Returns the number of registered capabilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}
