use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use levelguard_core::{CapabilityName, RoleId, UserId};
use serde::{Deserialize, Serialize};

use crate::{NativePermission, Scope, Subject};

/// Trust level of a resolved principal.
///
/// `Unbounded` is a resolution-time result only; stored definitions
/// and index entries always hold finite levels. The derived ordering
/// places `Unbounded` above every finite level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    /// A finite trust rank.
    Finite(u32),
    /// The distinguished system-admin rank, above all finite ranks.
    Unbounded,
}

impl Display for TrustLevel {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(level) => write!(formatter, "{level}"),
            Self::Unbounded => write!(formatter, "unbounded"),
        }
    }
}

/// One persisted permission level definition, loaded read-only per
/// index rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionLevelDefinition {
    /// Scope the definition applies to.
    pub scope: Scope,
    /// Trust rank granted by this definition.
    pub level: u32,
    /// Platform-native permission flags granted by this definition.
    pub granted_native_permissions: BTreeSet<NativePermission>,
    /// System capability names granted by this definition, raw until
    /// validated against the capability registry at index build.
    pub granted_system_permissions: BTreeSet<CapabilityName>,
    /// Users this definition applies to.
    pub subject_user_ids: BTreeSet<UserId>,
    /// Roles this definition applies to.
    pub subject_role_ids: BTreeSet<RoleId>,
    /// Whether this definition applies to every principal in scope.
    pub applies_to_everyone: bool,
    /// Disabled definitions never contribute to the index.
    pub disabled: bool,
}

impl PermissionLevelDefinition {
    /// Returns every subject this definition indexes under.
    #[must_use]
    pub fn subjects(&self) -> Vec<Subject> {
        let mut subjects = Vec::with_capacity(
            usize::from(self.applies_to_everyone)
                + self.subject_user_ids.len()
                + self.subject_role_ids.len(),
        );

        if self.applies_to_everyone {
            subjects.push(Subject::Everyone);
        }
        subjects.extend(self.subject_user_ids.iter().copied().map(Subject::User));
        subjects.extend(self.subject_role_ids.iter().copied().map(Subject::Role));

        subjects
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use levelguard_core::{RoleId, UserId};

    use super::{PermissionLevelDefinition, TrustLevel};
    use crate::{Scope, Subject};

    #[test]
    fn unbounded_level_outranks_every_finite_level() {
        assert!(TrustLevel::Unbounded > TrustLevel::Finite(u32::MAX));
        assert!(TrustLevel::Finite(1) > TrustLevel::Finite(0));
    }

    #[test]
    fn definition_expands_everyone_users_and_roles() {
        let definition = PermissionLevelDefinition {
            scope: Scope::Global,
            level: 1,
            granted_native_permissions: BTreeSet::new(),
            granted_system_permissions: BTreeSet::new(),
            subject_user_ids: BTreeSet::from([UserId::new(10)]),
            subject_role_ids: BTreeSet::from([RoleId::new(20)]),
            applies_to_everyone: true,
            disabled: false,
        };

        let subjects = definition.subjects();
        assert_eq!(subjects.len(), 3);
        assert!(subjects.contains(&Subject::Everyone));
        assert!(subjects.contains(&Subject::User(UserId::new(10))));
        assert!(subjects.contains(&Subject::Role(RoleId::new(20))));
    }

    #[test]
    fn definition_with_no_subjects_expands_to_nothing() {
        let definition = PermissionLevelDefinition {
            scope: Scope::Global,
            level: 4,
            granted_native_permissions: BTreeSet::new(),
            granted_system_permissions: BTreeSet::new(),
            subject_user_ids: BTreeSet::new(),
            subject_role_ids: BTreeSet::new(),
            applies_to_everyone: false,
            disabled: false,
        };

        assert!(definition.subjects().is_empty());
    }
}
