//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod capability_grant_unbounded_policy;
mod guild_owner_capability;
mod in_memory_guild_directory;
mod in_memory_level_store;
mod postgres_level_store;

pub use capability_grant_unbounded_policy::CapabilityGrantUnboundedPolicy;
pub use guild_owner_capability::GuildOwnerCapability;
pub use in_memory_guild_directory::InMemoryGuildDirectory;
pub use in_memory_level_store::InMemoryLevelStore;
pub use postgres_level_store::PostgresLevelStore;
