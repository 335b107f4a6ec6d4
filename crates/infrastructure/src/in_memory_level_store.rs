use async_trait::async_trait;
use levelguard_application::LevelStore;
use levelguard_core::AppResult;
use levelguard_domain::PermissionLevelDefinition;
use tokio::sync::RwLock;

/// In-memory level store adapter for tests and embedded setups.
#[derive(Default)]
pub struct InMemoryLevelStore {
    definitions: RwLock<Vec<PermissionLevelDefinition>>,
}

impl InMemoryLevelStore {
    /// Creates an empty in-memory level store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all stored definitions.
    pub async fn replace_definitions(&self, definitions: Vec<PermissionLevelDefinition>) {
        *self.definitions.write().await = definitions;
    }

    /// Appends one definition to the store.
    pub async fn push_definition(&self, definition: PermissionLevelDefinition) {
        self.definitions.write().await.push(definition);
    }
}

#[async_trait]
impl LevelStore for InMemoryLevelStore {
    async fn load_enabled_definitions(&self) -> AppResult<Vec<PermissionLevelDefinition>> {
        Ok(self
            .definitions
            .read()
            .await
            .iter()
            .filter(|definition| !definition.disabled)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use levelguard_application::LevelStore;
    use levelguard_core::AppResult;
    use levelguard_domain::{PermissionLevelDefinition, Scope};

    use super::InMemoryLevelStore;

    fn definition(level: u32, disabled: bool) -> PermissionLevelDefinition {
        PermissionLevelDefinition {
            scope: Scope::Global,
            level,
            granted_native_permissions: BTreeSet::new(),
            granted_system_permissions: BTreeSet::new(),
            subject_user_ids: BTreeSet::new(),
            subject_role_ids: BTreeSet::new(),
            applies_to_everyone: true,
            disabled,
        }
    }

    #[tokio::test]
    async fn load_skips_disabled_definitions() -> AppResult<()> {
        let store = InMemoryLevelStore::new();
        store.push_definition(definition(1, false)).await;
        store.push_definition(definition(2, true)).await;

        let loaded = store.load_enabled_definitions().await?;

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].level, 1);
        Ok(())
    }

    #[tokio::test]
    async fn replace_overwrites_previous_definitions() -> AppResult<()> {
        let store = InMemoryLevelStore::new();
        store.push_definition(definition(1, false)).await;
        store.replace_definitions(vec![definition(7, false)]).await;

        let loaded = store.load_enabled_definitions().await?;

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].level, 7);
        Ok(())
    }
}
