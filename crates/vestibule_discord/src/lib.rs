//! Discord adapter for Vestibule member portals.
//!
//! Wires [`vestibule_core`] to Discord through Serenity: [`DiscordDirectory`]
//! implements the portal directory over the gateway cache and REST API,
//! [`VestibuleHandler`] routes member events, and [`VestibuleBot`] owns the
//! client lifecycle.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod conversions;
mod directory;
mod error;
mod handler;

pub use client::VestibuleBot;
pub use conversions::{
    capability_permission, channel_info, channel_kind, classify_status, from_serenity_overwrite,
    normalize_text_channel_name, platform_error, portal_member, role_info, to_capabilities,
    to_permissions, to_serenity_overwrite, to_serenity_overwrites,
};
pub use directory::DiscordDirectory;
pub use error::{DiscordError, DiscordErrorKind, DiscordResult};
pub use handler::VestibuleHandler;
