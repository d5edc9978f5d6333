//! Conversions between Serenity model types and Vestibule's domain types.

use serenity::http::HttpError;
use serenity::model::channel::{
    ChannelType, GuildChannel, PermissionOverwrite, PermissionOverwriteType,
};
use serenity::model::guild::Role;
use serenity::model::id::{RoleId, UserId};
use serenity::model::permissions::Permissions;
use serenity::model::user::User;
use tracing::warn;
use vestibule_core::{
    Capability, CapabilitySet, ChannelInfo, ChannelKind, Overwrite, PortalMember, Principal,
    RoleInfo, Snowflake,
};
use vestibule_error::{PlatformError, PlatformErrorKind};

const CAPABILITIES: [Capability; 6] = [
    Capability::ViewChannel,
    Capability::SendMessages,
    Capability::ReadMessageHistory,
    Capability::AttachFiles,
    Capability::EmbedLinks,
    Capability::ManageMessages,
];

/// The Discord permission bit for a capability.
pub fn capability_permission(capability: Capability) -> Permissions {
    match capability {
        Capability::ViewChannel => Permissions::VIEW_CHANNEL,
        Capability::SendMessages => Permissions::SEND_MESSAGES,
        Capability::ReadMessageHistory => Permissions::READ_MESSAGE_HISTORY,
        Capability::AttachFiles => Permissions::ATTACH_FILES,
        Capability::EmbedLinks => Permissions::EMBED_LINKS,
        Capability::ManageMessages => Permissions::MANAGE_MESSAGES,
    }
}

/// Combine a capability set into Discord permission bits.
pub fn to_permissions(capabilities: &CapabilitySet) -> Permissions {
    capabilities
        .iter()
        .fold(Permissions::empty(), |acc, cap| acc | capability_permission(*cap))
}

/// The capabilities Vestibule knows about within a permission bitset.
///
/// Bits without a matching capability are dropped.
pub fn to_capabilities(permissions: Permissions) -> CapabilitySet {
    CAPABILITIES
        .into_iter()
        .filter(|cap| permissions.contains(capability_permission(*cap)))
        .collect()
}

/// Convert a domain overwrite into Serenity's representation.
pub fn to_serenity_overwrite(overwrite: &Overwrite) -> PermissionOverwrite {
    let kind = match overwrite.principal() {
        Principal::Role(id) => PermissionOverwriteType::Role(RoleId::new(id.get())),
        Principal::Member(id) => PermissionOverwriteType::Member(UserId::new(id.get())),
    };
    PermissionOverwrite {
        allow: to_permissions(overwrite.allow()),
        deny: to_permissions(overwrite.deny()),
        kind,
    }
}

/// Convert a list of domain overwrites into Serenity's representation.
pub fn to_serenity_overwrites(overwrites: &[Overwrite]) -> Vec<PermissionOverwrite> {
    overwrites.iter().map(to_serenity_overwrite).collect()
}

/// Convert a Serenity overwrite into a domain overwrite.
pub fn from_serenity_overwrite(overwrite: &PermissionOverwrite) -> Option<Overwrite> {
    let principal = match overwrite.kind {
        PermissionOverwriteType::Role(id) => Principal::Role(Snowflake(id.get())),
        PermissionOverwriteType::Member(id) => Principal::Member(Snowflake(id.get())),
        _ => {
            warn!("Unknown permission overwrite type, skipping");
            return None;
        }
    };
    Some(Overwrite::new(
        principal,
        to_capabilities(overwrite.allow),
        to_capabilities(overwrite.deny),
    ))
}

/// Map a Serenity channel type onto the kinds Vestibule distinguishes.
pub fn channel_kind(kind: ChannelType) -> ChannelKind {
    match kind {
        ChannelType::Category => ChannelKind::Category,
        ChannelType::Text => ChannelKind::Text,
        _ => ChannelKind::Other,
    }
}

/// Snapshot a guild channel.
pub fn channel_info(channel: &GuildChannel) -> ChannelInfo {
    ChannelInfo::new(
        Snowflake(channel.id.get()),
        channel.name.clone(),
        channel_kind(channel.kind),
        channel.parent_id.map(|id| Snowflake(id.get())),
        channel.position,
        channel
            .permission_overwrites
            .iter()
            .filter_map(from_serenity_overwrite)
            .collect(),
    )
}

/// Snapshot a guild role.
pub fn role_info(role: &Role) -> RoleInfo {
    RoleInfo::new(role.id.get(), role.name.clone())
}

/// The member snapshot used for naming and ownership.
///
/// The username, not the guild nickname, is the display name.
pub fn portal_member(user: &User) -> PortalMember {
    PortalMember::new(user.id.get(), user.name.clone())
}

/// Discord's rewrite of a text channel name: lowercase, whitespace runs become `-`.
///
/// ```
/// use vestibule_discord::normalize_text_channel_name;
///
/// assert_eq!(normalize_text_channel_name("General"), "general");
/// assert_eq!(normalize_text_channel_name("Shared  Files"), "shared-files");
/// ```
pub fn normalize_text_channel_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Classify a Discord HTTP error status.
pub fn classify_status(status: u16, message: String) -> PlatformErrorKind {
    match status {
        401 | 403 => PlatformErrorKind::PermissionDenied(message),
        404 => PlatformErrorKind::NotFound(message),
        429 => PlatformErrorKind::RateLimited(message),
        _ => PlatformErrorKind::Rejected { status, message },
    }
}

/// Convert a Serenity error into a platform error.
#[track_caller]
pub fn platform_error(err: serenity::Error) -> PlatformError {
    if let serenity::Error::Http(http) = &err {
        let http: &HttpError = http;
        if let HttpError::UnsuccessfulRequest(response) = http {
            return PlatformError::new(classify_status(
                response.status_code.as_u16(),
                response.error.message.clone(),
            ));
        }
    }
    PlatformError::new(PlatformErrorKind::Transport(err.to_string()))
}
