//! Serenity event handler for member lifecycle events.

use crate::{DiscordDirectory, portal_member};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::gateway::{GatewayIntents, Ready};
use serenity::model::guild::Member;
use serenity::model::id::GuildId;
use serenity::model::user::User;
use std::sync::Arc;
use tracing::debug;
use vestibule_core::{PortalDispatcher, Snowflake};

/// Event handler for the Vestibule bot.
///
/// Each event builds a [`DiscordDirectory`] bound to the event's guild and
/// hands it to the shared [`PortalDispatcher`].
pub struct VestibuleHandler {
    dispatcher: Arc<PortalDispatcher>,
}

impl VestibuleHandler {
    /// Create a handler around a dispatcher.
    pub fn new(dispatcher: Arc<PortalDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Required gateway intents for the bot.
    ///
    /// Member events require the privileged members intent to be enabled in
    /// the Discord Developer Portal.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS
    }

    fn directory(ctx: &Context, guild_id: GuildId) -> DiscordDirectory {
        DiscordDirectory::new(ctx.http.clone(), guild_id).with_cache(ctx.cache.clone())
    }
}

#[async_trait]
impl EventHandler for VestibuleHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        self.dispatcher.handle_ready(
            &ready.user.name,
            Snowflake(ready.user.id.get()),
            ready.guilds.len(),
        );
    }

    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        debug!(guild_id = %new_member.guild_id, member_id = %new_member.user.id, "Member joined");
        let directory = Self::directory(&ctx, new_member.guild_id);
        let member = portal_member(&new_member.user);
        self.dispatcher.handle_member_join(&directory, &member).await;
    }

    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        _member_data_if_available: Option<Member>,
    ) {
        debug!(guild_id = %guild_id, member_id = %user.id, "Member left");
        let directory = Self::directory(&ctx, guild_id);
        let member = portal_member(&user);
        self.dispatcher.handle_member_leave(&directory, &member).await;
    }
}
