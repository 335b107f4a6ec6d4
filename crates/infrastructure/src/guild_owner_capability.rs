use std::sync::Arc;

use async_trait::async_trait;
use levelguard_application::{Capability, GuildDirectory};
use levelguard_core::{AppResult, CapabilityName};
use levelguard_domain::PrincipalDescriptor;

/// Capability granted to the owner of the principal's guild.
///
/// The predicate suspends for a directory lookup; a directory failure
/// propagates and is isolated per-capability by the resolver.
pub struct GuildOwnerCapability {
    name: CapabilityName,
    directory: Arc<dyn GuildDirectory>,
}

impl GuildOwnerCapability {
    /// Creates the capability over a guild directory collaborator.
    pub fn new(directory: Arc<dyn GuildDirectory>) -> AppResult<Self> {
        Ok(Self {
            name: CapabilityName::new("guild.owner")?,
            directory,
        })
    }
}

#[async_trait]
impl Capability for GuildOwnerCapability {
    fn name(&self) -> &CapabilityName {
        &self.name
    }

    async fn check(&self, principal: &PrincipalDescriptor) -> AppResult<bool> {
        let owner = self.directory.guild_owner(principal.guild_id).await?;
        Ok(owner == Some(principal.user_id))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use levelguard_application::Capability;
    use levelguard_core::{AppResult, GuildId, UserId};
    use levelguard_domain::PrincipalDescriptor;

    use super::GuildOwnerCapability;
    use crate::InMemoryGuildDirectory;

    fn principal(user_id: u64, guild_id: u64) -> PrincipalDescriptor {
        PrincipalDescriptor {
            user_id: UserId::new(user_id),
            guild_id: GuildId::new(guild_id),
            role_ids: Vec::new(),
            native_permissions: BTreeSet::new(),
        }
    }

    #[tokio::test]
    async fn owner_of_the_guild_holds_the_capability() -> AppResult<()> {
        let directory = Arc::new(InMemoryGuildDirectory::new());
        directory.set_owner(GuildId::new(1), UserId::new(10)).await;
        let capability = GuildOwnerCapability::new(directory)?;

        assert!(capability.check(&principal(10, 1)).await?);
        assert!(!capability.check(&principal(11, 1)).await?);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_guild_grants_nothing() -> AppResult<()> {
        let directory = Arc::new(InMemoryGuildDirectory::new());
        let capability = GuildOwnerCapability::new(directory)?;

        assert!(!capability.check(&principal(10, 99)).await?);
        Ok(())
    }
}
