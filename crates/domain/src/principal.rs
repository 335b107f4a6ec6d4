use std::collections::BTreeSet;

use levelguard_core::{CapabilityName, GuildId, RoleId, UserId};
use serde::{Deserialize, Serialize};

use crate::{NativePermission, TrustLevel};

/// Query-time description of one guild member.
///
/// The native permission set arrives pre-resolved from the host
/// platform; the resolver only ingests it, it never recomputes
/// platform-side role inheritance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalDescriptor {
    /// User the principal identifies as.
    pub user_id: UserId,
    /// Guild the principal is a member of.
    pub guild_id: GuildId,
    /// Roles currently assigned to the principal, in assignment order.
    pub role_ids: Vec<RoleId>,
    /// Natively-granted permission flags, already resolved platform-side.
    pub native_permissions: BTreeSet<NativePermission>,
}

/// Fully-merged permission profile produced by one resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Effective trust level, possibly unbounded.
    pub level: TrustLevel,
    /// Effective platform-native permission grants.
    pub granted_native_permissions: BTreeSet<NativePermission>,
    /// Effective system capability grants.
    pub granted_system_permissions: BTreeSet<CapabilityName>,
}
