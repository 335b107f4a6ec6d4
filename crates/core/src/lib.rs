//! Shared primitives for all Levelguard crates.

#![forbid(unsafe_code)]

/// Snowflake-style identifier newtypes.
pub mod ids;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use ids::{GuildId, RoleId, UserId};

/// Result type used across Levelguard crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated, non-empty name of a system capability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CapabilityName(String);

impl CapabilityName {
    /// Creates a validated capability name.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "capability name must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<CapabilityName> for String {
    fn from(value: CapabilityName) -> Self {
        value.0
    }
}

impl Display for CapabilityName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// The backing level store could not be reached.
    #[error("level store unavailable: {0}")]
    StoreUnavailable(String),

    /// Resolution was attempted before the first successful index rebuild.
    #[error("resolver used before the first successful rebuild")]
    UninitializedResolver,

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}
