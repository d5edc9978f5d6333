//! Discord bot client setup and lifecycle management.

use crate::{DiscordError, DiscordErrorKind, DiscordResult, VestibuleHandler};
use serenity::Client;
use serenity::http::Http;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use vestibule_core::{PortalConfig, PortalDispatcher};

/// Main Discord bot client for Vestibule.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use vestibule_core::PortalConfig;
/// use vestibule_discord::VestibuleBot;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let token = std::env::var("DISCORD_TOKEN")?;
///     let mut bot = VestibuleBot::new(token, Arc::new(PortalConfig::default())).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct VestibuleBot {
    client: Client,
    dispatcher: Arc<PortalDispatcher>,
}

impl VestibuleBot {
    /// Create a new bot instance.
    ///
    /// # Errors
    /// Returns an error if the token is blank or the Serenity client fails to
    /// initialize.
    #[instrument(skip(token, config), fields(token_len = token.len()))]
    pub async fn new(token: String, config: Arc<PortalConfig>) -> DiscordResult<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(DiscordError::new(DiscordErrorKind::InvalidToken));
        }

        info!("Initializing Vestibule Discord bot");
        let dispatcher = Arc::new(PortalDispatcher::new(config));
        let handler = VestibuleHandler::new(dispatcher.clone());
        let intents = VestibuleHandler::intents();

        info!("Building Serenity client with intents: {:?}", intents);

        let client = Client::builder(token, intents)
            .event_handler(handler)
            .await?;

        Ok(Self { client, dispatcher })
    }

    /// Start the bot and block until it shuts down.
    ///
    /// Ctrl+C shuts every shard down cleanly.
    ///
    /// # Errors
    /// Returns an error if the client fails to start or encounters a fatal error.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> DiscordResult<()> {
        let shard_manager = self.client.shard_manager.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Shutdown requested, stopping shards");
                    shard_manager.shutdown_all().await;
                }
                Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
            }
        });

        info!("Starting Discord bot");
        self.client.start().await?;

        info!("Discord bot stopped");
        Ok(())
    }

    /// The HTTP client, for calls outside event handlers.
    pub fn http(&self) -> Arc<Http> {
        self.client.http.clone()
    }

    /// The dispatcher shared with the event handler.
    pub fn dispatcher(&self) -> &Arc<PortalDispatcher> {
        &self.dispatcher
    }
}
