//! Domain entities and invariants for level-based permission resolution.

#![forbid(unsafe_code)]

mod level;
mod permission;
mod principal;
mod profile;
mod scope;

pub use level::{PermissionLevelDefinition, TrustLevel};
pub use permission::NativePermission;
pub use principal::{PrincipalDescriptor, ResolutionResult};
pub use profile::MergedProfile;
pub use scope::{Scope, Subject};
