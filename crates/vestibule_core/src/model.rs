//! Domain types shared by the policies, the provisioner and the reclaimer.
//!
//! These mirror the remote platform's objects closely enough to drive
//! provisioning decisions, without depending on any particular client library.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Platform identifier ("snowflake").
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
pub struct Snowflake(pub u64);

impl Snowflake {
    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A guild member as seen by a join or leave event.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PortalMember {
    /// Immutable member identifier.
    id: Snowflake,
    /// Mutable username at the time of the event.
    display_name: String,
}

impl PortalMember {
    /// Create a member snapshot.
    pub fn new(id: impl Into<Snowflake>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Who a permission overwrite applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Principal {
    /// A role; the guild's default "everyone" role is a role whose id equals the guild id.
    Role(Snowflake),
    /// A single member.
    Member(Snowflake),
}

impl Principal {
    /// The identifier this principal refers to.
    pub fn id(&self) -> Snowflake {
        match self {
            Self::Role(id) | Self::Member(id) => *id,
        }
    }
}

/// A single channel capability that an overwrite can allow or deny.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    /// See the channel at all.
    ViewChannel,
    /// Post messages.
    SendMessages,
    /// Read messages posted before joining the channel.
    ReadMessageHistory,
    /// Upload files.
    AttachFiles,
    /// Have links render embeds.
    EmbedLinks,
    /// Delete or pin other people's messages.
    ManageMessages,
}

/// Ordered set of capabilities.
pub type CapabilitySet = BTreeSet<Capability>;

/// A (principal, allow, deny) tuple attached to a category or channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Overwrite {
    /// Role or member the overwrite targets.
    principal: Principal,
    /// Capabilities explicitly granted.
    allow: CapabilitySet,
    /// Capabilities explicitly withheld.
    deny: CapabilitySet,
}

impl Overwrite {
    /// Overwrite that only allows the given capabilities.
    pub fn allowing(principal: Principal, caps: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            principal,
            allow: caps.into_iter().collect(),
            deny: CapabilitySet::new(),
        }
    }

    /// Overwrite that only denies the given capabilities.
    pub fn denying(principal: Principal, caps: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            principal,
            allow: CapabilitySet::new(),
            deny: caps.into_iter().collect(),
        }
    }

    /// Overwrite with explicit allow and deny sets.
    pub fn new(principal: Principal, allow: CapabilitySet, deny: CapabilitySet) -> Self {
        Self {
            principal,
            allow,
            deny,
        }
    }
}

/// The kinds of channel the portal logic distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ChannelKind {
    /// Grouping container.
    Category,
    /// Text channel.
    Text,
    /// Anything else (voice, forum, threads...).
    Other,
}

/// Snapshot of a guild channel or category.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ChannelInfo {
    /// Channel id.
    id: Snowflake,
    /// Channel name as stored by the platform.
    name: String,
    /// Category, text or other.
    kind: ChannelKind,
    /// Parent category, if any.
    #[builder(default)]
    parent: Option<Snowflake>,
    /// Sort position among siblings.
    #[builder(default)]
    position: u16,
    /// Permission overwrites attached to the channel.
    #[builder(default)]
    overwrites: Vec<Overwrite>,
}

impl ChannelInfo {
    /// Create a channel snapshot with every field given.
    pub fn new(
        id: Snowflake,
        name: impl Into<String>,
        kind: ChannelKind,
        parent: Option<Snowflake>,
        position: u16,
        overwrites: Vec<Overwrite>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            parent,
            position,
            overwrites,
        }
    }

    /// Start building a channel snapshot.
    pub fn builder() -> ChannelInfoBuilder {
        ChannelInfoBuilder::default()
    }

    /// Whether any overwrite on this channel targets the given member.
    pub fn has_member_overwrite(&self, member: Snowflake) -> bool {
        self.overwrites
            .iter()
            .any(|o| *o.principal() == Principal::Member(member))
    }

    /// Whether this channel is a category.
    pub fn is_category(&self) -> bool {
        self.kind == ChannelKind::Category
    }
}

/// Snapshot of a guild role.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RoleInfo {
    /// Role id.
    id: Snowflake,
    /// Role name.
    name: String,
}

impl RoleInfo {
    /// Create a role snapshot.
    pub fn new(id: impl Into<Snowflake>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
