use std::collections::HashMap;

use async_trait::async_trait;
use levelguard_application::GuildDirectory;
use levelguard_core::{AppResult, GuildId, UserId};
use tokio::sync::RwLock;

/// In-memory guild directory adapter for tests and embedded setups.
#[derive(Default)]
pub struct InMemoryGuildDirectory {
    owners: RwLock<HashMap<GuildId, UserId>>,
}

impl InMemoryGuildDirectory {
    /// Creates an empty in-memory guild directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the owner of a guild.
    pub async fn set_owner(&self, guild_id: GuildId, owner_id: UserId) {
        self.owners.write().await.insert(guild_id, owner_id);
    }
}

#[async_trait]
impl GuildDirectory for InMemoryGuildDirectory {
    async fn guild_owner(&self, guild_id: GuildId) -> AppResult<Option<UserId>> {
        Ok(self.owners.read().await.get(&guild_id).copied())
    }
}
