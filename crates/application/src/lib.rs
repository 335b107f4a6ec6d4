//! Application services and ports for level-based permission
//! resolution.

#![forbid(unsafe_code)]

mod capability_registry;
mod level_index;
mod resolver_ports;
mod resolver_service;

pub use capability_registry::CapabilityRegistry;
pub use level_index::LevelIndex;
pub use resolver_ports::{Capability, GuildDirectory, LevelStore, UnboundedPrincipalPolicy};
pub use resolver_service::LevelPermissionResolver;
