use std::str::FromStr;

use levelguard_core::AppError;
use serde::{Deserialize, Serialize};

/// Platform-native permission flags ingested from the host platform.
///
/// The resolver never recomputes platform-side role inheritance; these
/// flags arrive pre-resolved on the principal or as grants on a
/// permission level definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativePermission {
    /// Full administrative access on the platform side.
    Administrator,
    /// Allows banning members.
    BanMembers,
    /// Allows kicking members.
    KickMembers,
    /// Allows timing out members.
    ModerateMembers,
    /// Allows changing guild-wide settings.
    ManageGuild,
    /// Allows creating, editing and assigning roles.
    ManageRoles,
    /// Allows deleting and pinning other members' messages.
    ManageMessages,
    /// Allows changing other members' nicknames.
    ManageNicknames,
    /// Allows reading the guild audit log.
    ViewAuditLog,
    /// Allows mentioning all members at once.
    MentionEveryone,
}

impl NativePermission {
    /// Returns a stable storage value for this permission flag.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::BanMembers => "ban_members",
            Self::KickMembers => "kick_members",
            Self::ModerateMembers => "moderate_members",
            Self::ManageGuild => "manage_guild",
            Self::ManageRoles => "manage_roles",
            Self::ManageMessages => "manage_messages",
            Self::ManageNicknames => "manage_nicknames",
            Self::ViewAuditLog => "view_audit_log",
            Self::MentionEveryone => "mention_everyone",
        }
    }

    /// Returns all known permission flags.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[NativePermission] = &[
            NativePermission::Administrator,
            NativePermission::BanMembers,
            NativePermission::KickMembers,
            NativePermission::ModerateMembers,
            NativePermission::ManageGuild,
            NativePermission::ManageRoles,
            NativePermission::ManageMessages,
            NativePermission::ManageNicknames,
            NativePermission::ViewAuditLog,
            NativePermission::MentionEveryone,
        ];

        ALL
    }
}

impl FromStr for NativePermission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "administrator" => Ok(Self::Administrator),
            "ban_members" => Ok(Self::BanMembers),
            "kick_members" => Ok(Self::KickMembers),
            "moderate_members" => Ok(Self::ModerateMembers),
            "manage_guild" => Ok(Self::ManageGuild),
            "manage_roles" => Ok(Self::ManageRoles),
            "manage_messages" => Ok(Self::ManageMessages),
            "manage_nicknames" => Ok(Self::ManageNicknames),
            "view_audit_log" => Ok(Self::ViewAuditLog),
            "mention_everyone" => Ok(Self::MentionEveryone),
            _ => Err(AppError::Validation(format!(
                "unknown native permission value '{value}'"
            ))),
        }
    }
}
