use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identifier of a guild on the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GuildId(u64);

impl GuildId {
    /// Creates a guild identifier from a raw snowflake value.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw snowflake value.
    #[must_use]
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Display for GuildId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Identifier of a user on the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(u64);

impl UserId {
    /// Creates a user identifier from a raw snowflake value.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw snowflake value.
    #[must_use]
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Identifier of a guild role on the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleId(u64);

impl RoleId {
    /// Creates a role identifier from a raw snowflake value.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw snowflake value.
    #[must_use]
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Display for RoleId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{GuildId, UserId};

    #[test]
    fn guild_id_formats_as_raw_value() {
        let id = GuildId::new(8_146_574_212_337_664);
        assert_eq!(id.to_string(), "8146574212337664");
    }

    #[test]
    fn user_id_round_trips_raw_value() {
        let id = UserId::new(42);
        assert_eq!(id.as_u64(), 42);
    }
}
