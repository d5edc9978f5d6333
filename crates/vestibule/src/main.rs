//! Vestibule CLI binary.
//!
//! - `run` (default): connect to Discord and manage member portals
//! - `check`: validate configuration and preview a portal offline

use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use vestibule::{CheckReport, Cli, Commands, LoggingConfig, init_logging};
use vestibule_core::PortalMember;
use vestibule_discord::VestibuleBot;
use vestibule_error::ConfigError;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    init_logging(
        &LoggingConfig::new()
            .with_verbose(cli.verbose)
            .with_json_logs(cli.json_logs),
    )?;

    match cli.command() {
        Commands::Run => run(&cli).await?,
        Commands::Check {
            member_name,
            member_id,
            json,
        } => check(&cli, member_name, member_id, json)?,
    }

    Ok(())
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(cli.portal_config()?);
    info!(
        category_prefix = %config.category_prefix(),
        channels = ?config.channel_names(),
        staff_role = ?config.staff_role(),
        "Configuration loaded"
    );

    let token = cli.token()?;
    let mut bot = VestibuleBot::new(token.to_string(), config).await?;
    bot.start().await?;
    Ok(())
}

fn check(
    cli: &Cli,
    member_name: Option<String>,
    member_id: Option<u64>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.portal_config()?;
    let sample = match (member_id, member_name) {
        (Some(id), Some(name)) => Some(PortalMember::new(id, name)),
        _ => None,
    };

    let report = CheckReport::new(&config, cli.raw_staff_role_id(), sample.as_ref());
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }

    if !report.is_valid() {
        error!("Configuration check failed");
        return Err(ConfigError::new("No portal channel names configured").into());
    }
    Ok(())
}
