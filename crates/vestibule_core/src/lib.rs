//! Member portal provisioning for chat communities.
//!
//! A portal is a category plus a fixed set of text channels that only one
//! member (and optionally a staff role) can see. This crate holds the
//! platform-agnostic logic; platform adapters implement [`PortalDirectory`].
//!
//! # Architecture
//!
//! - **naming**: deterministic category names from member identity
//! - **permissions**: the overwrite list every portal object carries
//! - **provisioner**: idempotent create-or-repair of a member's portal
//! - **reclaimer**: best-effort deletion when a member leaves
//! - **dispatcher**: join/leave entry points with per-member serialization
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vestibule_core::{PortalConfig, PortalDispatcher, PortalMember};
//!
//! let dispatcher = PortalDispatcher::new(Arc::new(PortalConfig::default()));
//! let member = PortalMember::new(81234567890127234u64, "Jo.Hn!");
//! dispatcher.handle_member_join(&directory, &member).await;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod directory;
mod dispatcher;
mod locks;
mod model;
mod naming;
mod permissions;
mod provisioner;
mod reclaimer;

pub use config::{
    DEFAULT_CATEGORY_PREFIX, DEFAULT_CHANNEL_NAMES, PortalConfig, PortalConfigBuilder,
    PortalConfigBuilderError, parse_channel_names, parse_staff_role_id,
};
pub use directory::{DirectoryResult, PortalDirectory};
pub use dispatcher::{PortalDispatcher, welcome_message};
pub use locks::{MemberKey, MemberLocks};
pub use model::{
    Capability, CapabilitySet, ChannelInfo, ChannelInfoBuilder, ChannelInfoBuilderError,
    ChannelKind, Overwrite, PortalMember, Principal, RoleInfo, Snowflake,
};
pub use naming::{
    IDENTITY_SUFFIX_LEN, category_name_for, identity_suffix, matches_identity_suffix,
    sanitize_display_name,
};
pub use permissions::{MEMBER_CAPABILITIES, STAFF_CAPABILITIES, portal_overwrites};
pub use provisioner::{Portal, PortalProvisioner};
pub use reclaimer::{PortalReclaimer, ReclaimReport, ReclaimStrategy};
