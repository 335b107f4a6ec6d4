use std::sync::Arc;

use levelguard_core::{AppError, AppResult};
use levelguard_domain::{
    MergedProfile, PrincipalDescriptor, ResolutionResult, Scope, Subject, TrustLevel,
};
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::{CapabilityRegistry, LevelIndex, LevelStore, UnboundedPrincipalPolicy};

/// Query-time entry point resolving principals against the currently
/// installed level index snapshot.
///
/// The snapshot is replaced copy-on-write: [`reload`] builds a
/// complete new index off to the side and swaps it in as its last
/// step, so concurrent resolutions always observe a fully-built index
/// and a failed rebuild leaves the previous snapshot authoritative.
///
/// [`reload`]: LevelPermissionResolver::reload
pub struct LevelPermissionResolver {
    store: Arc<dyn LevelStore>,
    registry: Arc<CapabilityRegistry>,
    unbounded_policy: Arc<dyn UnboundedPrincipalPolicy>,
    snapshot: RwLock<Option<Arc<LevelIndex>>>,
    rebuild_guard: Mutex<()>,
}

impl LevelPermissionResolver {
    /// Creates a resolver from its collaborator ports.
    ///
    /// The resolver starts uninitialized; a successful [`reload`] must
    /// complete before the first resolution.
    ///
    /// [`reload`]: LevelPermissionResolver::reload
    #[must_use]
    pub fn new(
        store: Arc<dyn LevelStore>,
        registry: Arc<CapabilityRegistry>,
        unbounded_policy: Arc<dyn UnboundedPrincipalPolicy>,
    ) -> Self {
        Self {
            store,
            registry,
            unbounded_policy,
            snapshot: RwLock::new(None),
            rebuild_guard: Mutex::new(()),
        }
    }

    /// Rebuilds the level index wholesale and installs it atomically.
    ///
    /// Returns the number of installed index entries. Concurrent
    /// reloads are serialized; a loader failure surfaces to the caller
    /// without touching the current snapshot.
    pub async fn reload(&self) -> AppResult<usize> {
        let _rebuild = self.rebuild_guard.lock().await;

        let definitions = self.store.load_enabled_definitions().await?;
        let index = LevelIndex::build(definitions, &self.registry);
        let entry_count = index.len();

        *self.snapshot.write().await = Some(Arc::new(index));
        info!(entries = entry_count, "loaded permission level entries");

        Ok(entry_count)
    }

    /// Resolves the effective permission profile of one principal.
    ///
    /// Resolution is total once the resolver is initialized: missing
    /// index entries and failing capability predicates never abort it.
    pub async fn resolve(&self, principal: &PrincipalDescriptor) -> AppResult<ResolutionResult> {
        let index = self.current_snapshot().await?;
        let mut merged = self.merge_applicable_entries(&index, principal);

        merged
            .granted_native_permissions
            .extend(principal.native_permissions.iter().copied());

        for capability in self.registry.iter() {
            if merged.granted_system_permissions.contains(capability.name()) {
                continue;
            }

            match capability.check(principal).await {
                Ok(true) => {
                    merged
                        .granted_system_permissions
                        .insert(capability.name().clone());
                }
                Ok(false) => {}
                Err(error) => {
                    warn!(
                        capability = %capability.name(),
                        user_id = %principal.user_id,
                        %error,
                        "capability predicate failed, treating as not granted"
                    );
                }
            }
        }

        let level = if self.unbounded_policy.is_unbounded_principal(&merged).await {
            TrustLevel::Unbounded
        } else {
            TrustLevel::Finite(merged.level)
        };

        Ok(ResolutionResult {
            level,
            granted_native_permissions: merged.granted_native_permissions,
            granted_system_permissions: merged.granted_system_permissions,
        })
    }

    /// Resolves only the effective trust level of one principal.
    pub async fn level_of(&self, principal: &PrincipalDescriptor) -> AppResult<TrustLevel> {
        Ok(self.resolve(principal).await?.level)
    }

    /// Returns whether the actor outranks the target strictly enough
    /// to take moderation action against them.
    pub async fn can_moderate(
        &self,
        actor: &PrincipalDescriptor,
        target: &PrincipalDescriptor,
    ) -> AppResult<bool> {
        let actor_level = self.level_of(actor).await?;
        let target_level = self.level_of(target).await?;

        Ok(actor_level > target_level)
    }

    async fn current_snapshot(&self) -> AppResult<Arc<LevelIndex>> {
        self.snapshot
            .read()
            .await
            .clone()
            .ok_or(AppError::UninitializedResolver)
    }

    fn merge_applicable_entries(
        &self,
        index: &LevelIndex,
        principal: &PrincipalDescriptor,
    ) -> MergedProfile {
        let guild_scope = Scope::Guild(principal.guild_id);
        let mut keys = Vec::with_capacity(3 + principal.role_ids.len());
        keys.push((Scope::Global, Subject::Everyone));
        keys.push((Scope::Global, Subject::User(principal.user_id)));
        keys.push((guild_scope, Subject::User(principal.user_id)));
        keys.extend(
            principal
                .role_ids
                .iter()
                .map(|role_id| (guild_scope, Subject::Role(*role_id))),
        );

        MergedProfile::merge(
            keys.into_iter()
                .filter_map(|(scope, subject)| index.lookup(scope, subject)),
        )
    }
}
