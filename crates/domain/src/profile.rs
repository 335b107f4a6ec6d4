use std::collections::BTreeSet;

use levelguard_core::CapabilityName;
use serde::{Deserialize, Serialize};

use crate::NativePermission;

/// Effective permission profile folded from one or more definitions.
///
/// Merging is commutative, associative and idempotent, with
/// [`MergedProfile::identity`] as the identity element, so build-time
/// and query-time folds may combine entries in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedProfile {
    /// Finite trust rank; the maximum over all merged inputs.
    pub level: u32,
    /// Union of all granted platform-native permission flags.
    pub granted_native_permissions: BTreeSet<NativePermission>,
    /// Union of all granted system capability names.
    pub granted_system_permissions: BTreeSet<CapabilityName>,
}

impl MergedProfile {
    /// Returns the merge identity: level zero and empty grant sets.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Returns the merge of this profile with another.
    #[must_use]
    pub fn merged_with(&self, other: &Self) -> Self {
        Self {
            level: self.level.max(other.level),
            granted_native_permissions: self
                .granted_native_permissions
                .union(&other.granted_native_permissions)
                .copied()
                .collect(),
            granted_system_permissions: self
                .granted_system_permissions
                .union(&other.granted_system_permissions)
                .cloned()
                .collect(),
        }
    }

    /// Folds any number of profiles into one, starting from the
    /// identity element.
    #[must_use]
    pub fn merge<'a>(profiles: impl IntoIterator<Item = &'a Self>) -> Self {
        profiles
            .into_iter()
            .fold(Self::identity(), |merged, profile| {
                merged.merged_with(profile)
            })
    }
}
