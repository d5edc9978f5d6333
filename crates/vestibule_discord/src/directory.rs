//! `PortalDirectory` over Serenity's cache and HTTP client.
//!
//! Reads prefer the gateway cache and fall back to the REST API when the guild
//! is not cached. Writes always go through the REST API.

use crate::conversions::{
    channel_info, normalize_text_channel_name, platform_error, role_info, to_serenity_overwrites,
};
use async_trait::async_trait;
use serenity::builder::{CreateChannel, EditChannel};
use serenity::cache::Cache;
use serenity::http::Http;
use serenity::model::channel::{ChannelType, GuildChannel};
use serenity::model::guild::Role;
use serenity::model::id::{ChannelId, GuildId, RoleId};
use std::sync::Arc;
use tracing::{debug, instrument};
use vestibule_core::{ChannelInfo, DirectoryResult, Overwrite, PortalDirectory, RoleInfo, Snowflake};

/// One guild's channels and roles, as seen through Serenity.
#[derive(Clone)]
pub struct DiscordDirectory {
    guild_id: GuildId,
    http: Arc<Http>,
    cache: Option<Arc<Cache>>,
}

impl DiscordDirectory {
    /// Directory that always reads over HTTP.
    pub fn new(http: Arc<Http>, guild_id: GuildId) -> Self {
        Self {
            guild_id,
            http,
            cache: None,
        }
    }

    /// Read from the gateway cache before falling back to HTTP.
    pub fn with_cache(mut self, cache: Arc<Cache>) -> Self {
        self.cache = Some(cache);
        self
    }

    fn cached_channels(&self) -> Option<Vec<GuildChannel>> {
        let cache = self.cache.as_ref()?;
        let guild = cache.guild(self.guild_id)?;
        Some(guild.channels.values().cloned().collect())
    }

    fn cached_role(&self, id: RoleId) -> Option<Option<Role>> {
        let cache = self.cache.as_ref()?;
        let guild = cache.guild(self.guild_id)?;
        Some(guild.roles.get(&id).cloned())
    }

    async fn guild_channels(&self) -> DirectoryResult<Vec<GuildChannel>> {
        if let Some(channels) = self.cached_channels() {
            return Ok(channels);
        }
        debug!(guild_id = %self.guild_id, "Guild not cached, fetching channels over HTTP");
        self.http
            .get_channels(self.guild_id)
            .await
            .map_err(platform_error)
    }
}

#[async_trait]
impl PortalDirectory for DiscordDirectory {
    fn guild_id(&self) -> Snowflake {
        Snowflake(self.guild_id.get())
    }

    async fn categories(&self) -> DirectoryResult<Vec<ChannelInfo>> {
        let mut categories: Vec<ChannelInfo> = self
            .guild_channels()
            .await?
            .iter()
            .filter(|c| c.kind == ChannelType::Category)
            .map(channel_info)
            .collect();
        categories.sort_by_key(|c| (*c.position(), *c.id()));
        Ok(categories)
    }

    async fn channels_by_parent(&self, parent: Snowflake) -> DirectoryResult<Vec<ChannelInfo>> {
        let parent = ChannelId::new(parent.get());
        let mut children: Vec<ChannelInfo> = self
            .guild_channels()
            .await?
            .iter()
            .filter(|c| c.parent_id == Some(parent))
            .map(channel_info)
            .collect();
        children.sort_by_key(|c| (*c.position(), *c.id()));
        Ok(children)
    }

    fn channel_name_matches(&self, existing: &str, configured: &str) -> bool {
        existing == configured || existing == normalize_text_channel_name(configured)
    }

    async fn find_role_by_id(&self, id: Snowflake) -> DirectoryResult<Option<RoleInfo>> {
        let role_id = RoleId::new(id.get());
        if let Some(role) = self.cached_role(role_id) {
            return Ok(role.as_ref().map(role_info));
        }
        let roles = self
            .http
            .get_guild_roles(self.guild_id)
            .await
            .map_err(platform_error)?;
        Ok(roles.iter().find(|r| r.id == role_id).map(role_info))
    }

    #[instrument(skip(self, overwrites), fields(guild_id = %self.guild_id))]
    async fn create_category(
        &self,
        name: &str,
        overwrites: &[Overwrite],
    ) -> DirectoryResult<ChannelInfo> {
        let builder = CreateChannel::new(name)
            .kind(ChannelType::Category)
            .permissions(to_serenity_overwrites(overwrites));
        let channel = self
            .guild_id
            .create_channel(self.http.as_ref(), builder)
            .await
            .map_err(platform_error)?;
        debug!(channel_id = %channel.id, "Category created");
        Ok(channel_info(&channel))
    }

    #[instrument(skip(self, overwrites), fields(guild_id = %self.guild_id))]
    async fn create_text_channel(
        &self,
        parent: Snowflake,
        name: &str,
        overwrites: &[Overwrite],
    ) -> DirectoryResult<ChannelInfo> {
        let builder = CreateChannel::new(name)
            .kind(ChannelType::Text)
            .category(ChannelId::new(parent.get()))
            .permissions(to_serenity_overwrites(overwrites));
        let channel = self
            .guild_id
            .create_channel(self.http.as_ref(), builder)
            .await
            .map_err(platform_error)?;
        debug!(channel_id = %channel.id, "Text channel created");
        Ok(channel_info(&channel))
    }

    #[instrument(skip(self, overwrites), fields(guild_id = %self.guild_id))]
    async fn set_overwrites(
        &self,
        channel: Snowflake,
        overwrites: &[Overwrite],
    ) -> DirectoryResult<()> {
        let builder = EditChannel::new().permissions(to_serenity_overwrites(overwrites));
        ChannelId::new(channel.get())
            .edit(self.http.as_ref(), builder)
            .await
            .map_err(platform_error)?;
        Ok(())
    }

    #[instrument(skip(self), fields(guild_id = %self.guild_id))]
    async fn delete_channel(&self, channel: Snowflake) -> DirectoryResult<()> {
        ChannelId::new(channel.get())
            .delete(self.http.as_ref())
            .await
            .map_err(platform_error)?;
        Ok(())
    }

    #[instrument(skip(self, content), fields(guild_id = %self.guild_id))]
    async fn send_message(&self, channel: Snowflake, content: &str) -> DirectoryResult<()> {
        ChannelId::new(channel.get())
            .say(self.http.as_ref(), content)
            .await
            .map_err(platform_error)?;
        Ok(())
    }
}
