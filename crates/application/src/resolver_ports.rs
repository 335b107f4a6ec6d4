use async_trait::async_trait;
use levelguard_core::{AppResult, CapabilityName, GuildId, UserId};
use levelguard_domain::{MergedProfile, PermissionLevelDefinition, PrincipalDescriptor};

/// Store port for persisted permission level definitions.
#[async_trait]
pub trait LevelStore: Send + Sync {
    /// Loads every enabled definition, or fails without a partial
    /// result when the backing store cannot be reached.
    async fn load_enabled_definitions(&self) -> AppResult<Vec<PermissionLevelDefinition>>;
}

/// One named system capability with a dynamic predicate.
///
/// Predicates may suspend for collaborator I/O. A predicate error is
/// isolated to its own capability during resolution and never aborts
/// the evaluation of the others.
#[async_trait]
pub trait Capability: Send + Sync {
    /// Returns the stable capability name.
    fn name(&self) -> &CapabilityName;

    /// Evaluates the predicate against one principal.
    async fn check(&self, principal: &PrincipalDescriptor) -> AppResult<bool>;
}

/// Policy port deciding whether a merged profile qualifies as an
/// unbounded-level principal.
#[async_trait]
pub trait UnboundedPrincipalPolicy: Send + Sync {
    /// Returns whether the profile elevates to the unbounded level.
    async fn is_unbounded_principal(&self, profile: &MergedProfile) -> bool;
}

/// Platform-membership port for guild metadata lookups used by
/// capability predicates.
#[async_trait]
pub trait GuildDirectory: Send + Sync {
    /// Returns the owner of a guild, if the guild is known.
    async fn guild_owner(&self, guild_id: GuildId) -> AppResult<Option<UserId>>;
}
