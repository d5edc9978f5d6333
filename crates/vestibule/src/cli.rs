//! CLI command definitions.

use clap::{Parser, Subcommand};
use tracing::warn;
use vestibule_core::{
    DEFAULT_CATEGORY_PREFIX, DEFAULT_CHANNEL_NAMES, PortalConfig, parse_channel_names,
    parse_staff_role_id,
};
use vestibule_error::ConfigError;

/// Vestibule - private per-member portals for Discord communities
#[derive(Parser, Debug)]
#[command(name = "vestibule")]
#[command(about = "Private per-member portals for Discord communities", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Discord bot token
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Role that can see every portal (17-20 digit id)
    #[arg(long, env = "STAFF_ROLE_ID", global = true)]
    pub staff_role_id: Option<String>,

    /// Prefix for portal category names
    #[arg(long, env = "CATEGORY_PREFIX", default_value = DEFAULT_CATEGORY_PREFIX, global = true)]
    pub category_prefix: String,

    /// Comma-separated text channels created in each portal
    #[arg(long, env = "CHANNEL_NAMES", default_value = DEFAULT_CHANNEL_NAMES, global = true)]
    pub channel_names: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(
        long,
        env = "VESTIBULE_JSON_LOGS",
        global = true,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Connect to Discord and manage portals
    Run,

    /// Validate the configuration without connecting
    Check {
        /// Sample member name to preview a category name for
        #[arg(long, requires = "member_id")]
        member_name: Option<String>,

        /// Sample member id to preview a category name for
        #[arg(long, requires = "member_name", value_parser = clap::value_parser!(u64).range(1..))]
        member_id: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The requested command, `run` when none was given.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }

    /// The bot token, required to connect.
    ///
    /// # Errors
    /// Returns a configuration error when no non-blank token was supplied.
    pub fn token(&self) -> Result<&str, ConfigError> {
        match self.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ConfigError::new(
                "DISCORD_TOKEN is not set (pass --token or set it in the environment)",
            )),
        }
    }

    /// The staff role id as given, when non-blank.
    pub fn raw_staff_role_id(&self) -> Option<&str> {
        self.staff_role_id
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
    }

    /// Assemble the portal configuration from the parsed arguments.
    ///
    /// A malformed staff role id is logged and ignored. An empty channel list
    /// is logged here and rejected later by the provisioner.
    ///
    /// # Errors
    /// Returns a configuration error if the configuration cannot be built.
    pub fn portal_config(&self) -> Result<PortalConfig, ConfigError> {
        let staff_role = self.raw_staff_role_id().and_then(|raw| {
            let parsed = parse_staff_role_id(raw);
            if parsed.is_none() {
                warn!(value = %raw, "STAFF_ROLE_ID is not a valid role id, staff visibility disabled");
            }
            parsed
        });

        let channel_names = parse_channel_names(&self.channel_names);
        if channel_names.is_empty() {
            warn!("CHANNEL_NAMES is empty, portals cannot be provisioned");
        }

        PortalConfig::builder()
            .category_prefix(self.category_prefix.clone())
            .channel_names(channel_names)
            .staff_role(staff_role)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid portal configuration: {}", e)))
    }
}
