use std::str::FromStr;

use async_trait::async_trait;
use levelguard_application::LevelStore;
use levelguard_core::{AppError, AppResult, CapabilityName, GuildId, RoleId, UserId};
use levelguard_domain::{NativePermission, PermissionLevelDefinition, Scope};
use sqlx::{FromRow, PgPool};
use tracing::warn;

/// PostgreSQL-backed store for permission level definitions.
#[derive(Clone)]
pub struct PostgresLevelStore {
    pool: PgPool,
}

impl PostgresLevelStore {
    /// Creates a store with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PermissionLevelRow {
    guild_id: Option<i64>,
    level: i32,
    granted_native_permissions: Vec<String>,
    granted_system_permissions: Vec<String>,
    subject_user_ids: Vec<i64>,
    subject_role_ids: Vec<i64>,
    applies_to_everyone: bool,
}

#[async_trait]
impl LevelStore for PostgresLevelStore {
    async fn load_enabled_definitions(&self) -> AppResult<Vec<PermissionLevelDefinition>> {
        let rows = sqlx::query_as::<_, PermissionLevelRow>(
            r#"
            SELECT
                guild_id,
                level,
                granted_native_permissions,
                granted_system_permissions,
                subject_user_ids,
                subject_role_ids,
                applies_to_everyone
            FROM permission_levels
            WHERE NOT disabled
            ORDER BY guild_id NULLS FIRST, level
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::StoreUnavailable(format!("failed to load permission levels: {error}"))
        })?;

        Ok(rows.into_iter().map(definition_from_row).collect())
    }
}

/// Maps one persisted row into a definition.
///
/// Stale or malformed values must never block boot: unparseable grant
/// values and out-of-range ids are dropped with a warning instead of
/// failing the load.
fn definition_from_row(row: PermissionLevelRow) -> PermissionLevelDefinition {
    let scope = match row.guild_id.and_then(|value| u64::try_from(value).ok()) {
        Some(guild_id) => Scope::Guild(GuildId::new(guild_id)),
        None => Scope::Global,
    };

    let level = u32::try_from(row.level).unwrap_or_else(|_| {
        warn!(%scope, level = row.level, "clamping negative permission level to zero");
        0
    });

    let granted_native_permissions = row
        .granted_native_permissions
        .iter()
        .filter_map(|value| match NativePermission::from_str(value) {
            Ok(permission) => Some(permission),
            Err(_) => {
                warn!(%scope, value, "dropping unknown native permission flag");
                None
            }
        })
        .collect();

    let granted_system_permissions = row
        .granted_system_permissions
        .into_iter()
        .filter_map(|value| match CapabilityName::new(value.as_str()) {
            Ok(name) => Some(name),
            Err(_) => {
                warn!(%scope, value, "dropping malformed system capability name");
                None
            }
        })
        .collect();

    let subject_user_ids = row
        .subject_user_ids
        .into_iter()
        .filter_map(|value| match u64::try_from(value) {
            Ok(user_id) => Some(UserId::new(user_id)),
            Err(_) => {
                warn!(%scope, value, "dropping out-of-range subject user id");
                None
            }
        })
        .collect();

    let subject_role_ids = row
        .subject_role_ids
        .into_iter()
        .filter_map(|value| match u64::try_from(value) {
            Ok(role_id) => Some(RoleId::new(role_id)),
            Err(_) => {
                warn!(%scope, value, "dropping out-of-range subject role id");
                None
            }
        })
        .collect();

    PermissionLevelDefinition {
        scope,
        level,
        granted_native_permissions,
        granted_system_permissions,
        subject_user_ids,
        subject_role_ids,
        applies_to_everyone: row.applies_to_everyone,
        disabled: false,
    }
}
