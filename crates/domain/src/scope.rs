use std::fmt::{Display, Formatter};

use levelguard_core::{GuildId, RoleId, UserId};
use serde::{Deserialize, Serialize};

/// Scope a permission level definition applies to.
///
/// The global scope is a distinct variant rather than a reserved guild
/// id, so guild identifiers and the "all guilds" sentinel can never
/// collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Applies in every guild.
    Global,
    /// Applies in one guild only.
    Guild(GuildId),
}

impl Display for Scope {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(formatter, "global"),
            Self::Guild(guild_id) => write!(formatter, "guild:{guild_id}"),
        }
    }
}

/// Subject a level index entry is keyed by within a scope.
///
/// User and role identifiers live in separate variants, so an index
/// entry for a role can never shadow one for a user with the same raw
/// snowflake value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    /// Every principal in the scope.
    Everyone,
    /// One user.
    User(UserId),
    /// One guild role.
    Role(RoleId),
}

impl Display for Subject {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Everyone => write!(formatter, "everyone"),
            Self::User(user_id) => write!(formatter, "user:{user_id}"),
            Self::Role(role_id) => write!(formatter, "role:{role_id}"),
        }
    }
}
