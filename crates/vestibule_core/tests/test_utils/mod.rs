//! Test utilities for Vestibule core tests.
//!
//! This module provides an in-memory guild that implements `PortalDirectory`.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use vestibule_core::{
    ChannelInfo, ChannelKind, DirectoryResult, Overwrite, PortalDirectory, RoleInfo, Snowflake,
};
use vestibule_error::{PlatformError, PlatformErrorKind};

/// Guild id used by every fake directory; also the "everyone" role id.
pub const GUILD_ID: Snowflake = Snowflake(900_000_000_000_000_001);

/// A staff role id with a valid 18-digit format.
pub const STAFF_ROLE_ID: Snowflake = Snowflake(555_555_555_555_555_555);

/// A message recorded by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub channel: Snowflake,
    pub content: String,
}

#[derive(Debug, Default)]
struct FakeState {
    channels: Vec<ChannelInfo>,
    roles: Vec<RoleInfo>,
    messages: Vec<SentMessage>,
    next_id: u64,
    creates: usize,
    overwrite_updates: usize,
    deletes_attempted: Vec<Snowflake>,
    fail_deletes: HashSet<Snowflake>,
    fail_writes: bool,
    fail_messages: bool,
    fail_listing: bool,
    yield_calls: bool,
}

/// In-memory `PortalDirectory` with failure injection.
#[derive(Debug)]
pub struct FakeDirectory {
    state: Mutex<FakeState>,
}

impl Default for FakeDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                next_id: 1_000,
                ..FakeState::default()
            }),
        }
    }

    /// Add a role to the guild.
    pub fn with_role(self, id: Snowflake, name: &str) -> Self {
        self.state.lock().unwrap().roles.push(RoleInfo::new(id, name));
        self
    }

    /// Make deleting the given channel fail.
    pub fn fail_delete(&self, id: Snowflake) {
        self.state.lock().unwrap().fail_deletes.insert(id);
    }

    /// Make every create/update call fail.
    pub fn fail_writes(&self) {
        self.state.lock().unwrap().fail_writes = true;
    }

    /// Make message sends fail.
    pub fn fail_messages(&self) {
        self.state.lock().unwrap().fail_messages = true;
    }

    /// Make category listing fail.
    pub fn fail_listing(&self) {
        self.state.lock().unwrap().fail_listing = true;
    }

    /// Suspend at the start of every directory call so concurrent tasks interleave.
    pub fn yield_between_calls(&self) {
        self.state.lock().unwrap().yield_calls = true;
    }

    async fn pause(&self) {
        let yield_calls = self.state.lock().unwrap().yield_calls;
        if yield_calls {
            tokio::task::yield_now().await;
        }
    }

    /// Insert a channel directly, bypassing create counters.
    pub fn insert(&self, channel: ChannelInfo) {
        self.state.lock().unwrap().channels.push(channel);
    }

    /// Allocate an id the fake will not hand out itself.
    pub fn allocate_id(&self) -> Snowflake {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        Snowflake(state.next_id)
    }

    /// Strip every overwrite from a channel.
    pub fn clear_overwrites(&self, id: Snowflake) {
        let mut state = self.state.lock().unwrap();
        if let Some(channel) = state.channels.iter_mut().find(|c| *c.id() == id) {
            *channel = ChannelInfo::builder()
                .id(*channel.id())
                .name(channel.name().clone())
                .kind(*channel.kind())
                .parent(*channel.parent())
                .position(*channel.position())
                .overwrites(Vec::new())
                .build()
                .expect("valid channel");
        }
    }

    pub fn categories_named(&self, name: &str) -> Vec<ChannelInfo> {
        self.state
            .lock()
            .unwrap()
            .channels
            .iter()
            .filter(|c| c.is_category() && c.name() == name)
            .cloned()
            .collect()
    }

    pub fn all_categories(&self) -> Vec<ChannelInfo> {
        self.state
            .lock()
            .unwrap()
            .channels
            .iter()
            .filter(|c| c.is_category())
            .cloned()
            .collect()
    }

    pub fn children_of(&self, parent: Snowflake) -> Vec<ChannelInfo> {
        self.state
            .lock()
            .unwrap()
            .channels
            .iter()
            .filter(|c| *c.parent() == Some(parent))
            .cloned()
            .collect()
    }

    pub fn channel(&self, id: Snowflake) -> Option<ChannelInfo> {
        self.state
            .lock()
            .unwrap()
            .channels
            .iter()
            .find(|c| *c.id() == id)
            .cloned()
    }

    pub fn channel_count(&self) -> usize {
        self.state.lock().unwrap().channels.len()
    }

    pub fn messages(&self) -> Vec<SentMessage> {
        self.state.lock().unwrap().messages.clone()
    }

    pub fn creates(&self) -> usize {
        self.state.lock().unwrap().creates
    }

    pub fn overwrite_updates(&self) -> usize {
        self.state.lock().unwrap().overwrite_updates
    }

    pub fn deletes_attempted(&self) -> Vec<Snowflake> {
        self.state.lock().unwrap().deletes_attempted.clone()
    }

    fn create(
        &self,
        name: &str,
        kind: ChannelKind,
        parent: Option<Snowflake>,
        overwrites: &[Overwrite],
    ) -> DirectoryResult<ChannelInfo> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(PlatformError::new(PlatformErrorKind::PermissionDenied(
                "Missing Permissions".to_string(),
            )));
        }
        state.next_id += 1;
        let position = state
            .channels
            .iter()
            .filter(|c| *c.parent() == parent)
            .count() as u16;
        let channel = ChannelInfo::builder()
            .id(Snowflake(state.next_id))
            .name(name)
            .kind(kind)
            .parent(parent)
            .position(position)
            .overwrites(overwrites.to_vec())
            .build()
            .expect("valid channel");
        state.creates += 1;
        state.channels.push(channel.clone());
        Ok(channel)
    }
}

#[async_trait]
impl PortalDirectory for FakeDirectory {
    fn guild_id(&self) -> Snowflake {
        GUILD_ID
    }

    async fn categories(&self) -> DirectoryResult<Vec<ChannelInfo>> {
        self.pause().await;
        let state = self.state.lock().unwrap();
        if state.fail_listing {
            return Err(PlatformError::new(PlatformErrorKind::Transport(
                "gateway unavailable".to_string(),
            )));
        }
        Ok(state
            .channels
            .iter()
            .filter(|c| c.is_category())
            .cloned()
            .collect())
    }

    async fn channels_by_parent(&self, parent: Snowflake) -> DirectoryResult<Vec<ChannelInfo>> {
        self.pause().await;
        let mut children = self.children_of(parent);
        children.sort_by_key(|c| *c.position());
        Ok(children)
    }

    async fn find_role_by_id(&self, id: Snowflake) -> DirectoryResult<Option<RoleInfo>> {
        self.pause().await;
        Ok(self
            .state
            .lock()
            .unwrap()
            .roles
            .iter()
            .find(|r| *r.id() == id)
            .cloned())
    }

    async fn create_category(
        &self,
        name: &str,
        overwrites: &[Overwrite],
    ) -> DirectoryResult<ChannelInfo> {
        self.pause().await;
        self.create(name, ChannelKind::Category, None, overwrites)
    }

    async fn create_text_channel(
        &self,
        parent: Snowflake,
        name: &str,
        overwrites: &[Overwrite],
    ) -> DirectoryResult<ChannelInfo> {
        self.pause().await;
        self.create(name, ChannelKind::Text, Some(parent), overwrites)
    }

    async fn set_overwrites(
        &self,
        channel: Snowflake,
        overwrites: &[Overwrite],
    ) -> DirectoryResult<()> {
        self.pause().await;
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(PlatformError::new(PlatformErrorKind::PermissionDenied(
                "Missing Permissions".to_string(),
            )));
        }
        let Some(index) = state.channels.iter().position(|c| *c.id() == channel) else {
            return Err(PlatformError::new(PlatformErrorKind::NotFound(
                "Unknown Channel".to_string(),
            )));
        };
        let current = state.channels[index].clone();
        state.channels[index] = ChannelInfo::builder()
            .id(*current.id())
            .name(current.name().clone())
            .kind(*current.kind())
            .parent(*current.parent())
            .position(*current.position())
            .overwrites(overwrites.to_vec())
            .build()
            .expect("valid channel");
        state.overwrite_updates += 1;
        Ok(())
    }

    async fn delete_channel(&self, channel: Snowflake) -> DirectoryResult<()> {
        self.pause().await;
        let mut state = self.state.lock().unwrap();
        state.deletes_attempted.push(channel);
        if state.fail_deletes.contains(&channel) {
            return Err(PlatformError::new(PlatformErrorKind::RateLimited(
                "You are being rate limited.".to_string(),
            )));
        }
        let before = state.channels.len();
        state.channels.retain(|c| *c.id() != channel);
        if state.channels.len() == before {
            return Err(PlatformError::new(PlatformErrorKind::NotFound(
                "Unknown Channel".to_string(),
            )));
        }
        Ok(())
    }

    async fn send_message(&self, channel: Snowflake, content: &str) -> DirectoryResult<()> {
        self.pause().await;
        let mut state = self.state.lock().unwrap();
        if state.fail_messages {
            return Err(PlatformError::new(PlatformErrorKind::PermissionDenied(
                "Cannot send messages in this channel".to_string(),
            )));
        }
        state.messages.push(SentMessage {
            channel,
            content: content.to_string(),
        });
        Ok(())
    }
}
