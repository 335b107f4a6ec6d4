use async_trait::async_trait;
use levelguard_application::UnboundedPrincipalPolicy;
use levelguard_core::{AppResult, CapabilityName};
use levelguard_domain::MergedProfile;

/// Unbounded-principal policy triggered by a configured capability
/// being present in the merged profile.
pub struct CapabilityGrantUnboundedPolicy {
    capability: CapabilityName,
}

impl CapabilityGrantUnboundedPolicy {
    /// Creates a policy keyed on the given capability name.
    pub fn new(capability: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            capability: CapabilityName::new(capability)?,
        })
    }
}

#[async_trait]
impl UnboundedPrincipalPolicy for CapabilityGrantUnboundedPolicy {
    async fn is_unbounded_principal(&self, profile: &MergedProfile) -> bool {
        profile.granted_system_permissions.contains(&self.capability)
    }
}
