//! Read-through access to one guild's channels and roles.

use crate::{ChannelInfo, Overwrite, RoleInfo, Snowflake};
use async_trait::async_trait;
use vestibule_error::PlatformError;

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, PlatformError>;

/// Everything the provisioner and reclaimer need from the chat platform,
/// scoped to a single guild.
///
/// Reads may be served from a local cache. Writes are remote calls and each
/// one either fully succeeds or returns an error; there is no batching.
#[async_trait]
pub trait PortalDirectory: Send + Sync {
    /// The guild this directory is bound to.
    fn guild_id(&self) -> Snowflake;

    /// The guild's default "everyone" role.
    fn everyone_role(&self) -> Snowflake {
        self.guild_id()
    }

    /// Every category in the guild.
    async fn categories(&self) -> DirectoryResult<Vec<ChannelInfo>>;

    /// First category whose name equals `name` exactly.
    async fn find_category_by_name(&self, name: &str) -> DirectoryResult<Option<ChannelInfo>> {
        Ok(self
            .categories()
            .await?
            .into_iter()
            .find(|category| category.name() == name))
    }

    /// Direct children of a category, ordered by position.
    async fn channels_by_parent(&self, parent: Snowflake) -> DirectoryResult<Vec<ChannelInfo>>;

    /// Whether a child channel's name satisfies a configured channel name.
    ///
    /// Platforms that rewrite channel names on creation override this.
    fn channel_name_matches(&self, existing: &str, configured: &str) -> bool {
        existing == configured
    }

    /// Look up a role by id.
    async fn find_role_by_id(&self, id: Snowflake) -> DirectoryResult<Option<RoleInfo>>;

    /// Create a category carrying the given overwrites.
    async fn create_category(
        &self,
        name: &str,
        overwrites: &[Overwrite],
    ) -> DirectoryResult<ChannelInfo>;

    /// Create a text channel under `parent` carrying the given overwrites.
    async fn create_text_channel(
        &self,
        parent: Snowflake,
        name: &str,
        overwrites: &[Overwrite],
    ) -> DirectoryResult<ChannelInfo>;

    /// Replace a channel's whole overwrite list.
    async fn set_overwrites(&self, channel: Snowflake, overwrites: &[Overwrite])
    -> DirectoryResult<()>;

    /// Delete a channel or category.
    async fn delete_channel(&self, channel: Snowflake) -> DirectoryResult<()>;

    /// Post a plain text message.
    async fn send_message(&self, channel: Snowflake, content: &str) -> DirectoryResult<()>;
}
