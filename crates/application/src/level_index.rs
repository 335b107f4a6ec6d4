use std::collections::HashMap;

use levelguard_domain::{MergedProfile, PermissionLevelDefinition, Scope, Subject};
use tracing::warn;

use crate::CapabilityRegistry;

/// Immutable lookup index from `(scope, subject)` to one pre-merged
/// permission profile.
///
/// Definitions colliding on a key are folded at build time, so query
/// time only ever sees a single profile per key. Building is
/// order-independent because profile merging is commutative and
/// associative.
#[derive(Debug, Default)]
pub struct LevelIndex {
    entries: HashMap<(Scope, Subject), MergedProfile>,
}

impl LevelIndex {
    /// Builds an index from loaded definitions, validating raw system
    /// capability names against the registry.
    ///
    /// Unknown capability names are dropped with a warning; disabled
    /// definitions never contribute. Never fails on data content.
    #[must_use]
    pub fn build(
        definitions: Vec<PermissionLevelDefinition>,
        registry: &CapabilityRegistry,
    ) -> Self {
        let mut entries: HashMap<(Scope, Subject), MergedProfile> = HashMap::new();

        for definition in definitions {
            if definition.disabled {
                continue;
            }

            let profile = profile_from_definition(&definition, registry);

            for subject in definition.subjects() {
                let key = (definition.scope, subject);
                let merged = match entries.remove(&key) {
                    Some(existing) => existing.merged_with(&profile),
                    None => profile.clone(),
                };
                entries.insert(key, merged);
            }
        }

        Self { entries }
    }

    /// Returns the pre-merged profile for one key, if present.
    #[must_use]
    pub fn lookup(&self, scope: Scope, subject: Subject) -> Option<&MergedProfile> {
        self.entries.get(&(scope, subject))
    }

    /// Returns the number of index entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn profile_from_definition(
    definition: &PermissionLevelDefinition,
    registry: &CapabilityRegistry,
) -> MergedProfile {
    let granted_system_permissions = definition
        .granted_system_permissions
        .iter()
        .filter(|name| {
            if registry.contains(name) {
                return true;
            }

            warn!(
                capability = %name,
                scope = %definition.scope,
                "dropping unknown system capability from level definition"
            );
            false
        })
        .cloned()
        .collect();

    MergedProfile {
        level: definition.level,
        granted_native_permissions: definition.granted_native_permissions.clone(),
        granted_system_permissions,
    }
}
