//! Tests for argument parsing and configuration assembly.

use clap::Parser;
use std::sync::Once;
use vestibule::{Cli, Commands};
use vestibule_core::{PortalConfig, Snowflake};

const CONFIG_VARS: [&str; 5] = [
    "DISCORD_TOKEN",
    "STAFF_ROLE_ID",
    "CATEGORY_PREFIX",
    "CHANNEL_NAMES",
    "VESTIBULE_JSON_LOGS",
];

/// Clear configuration variables once, before any test parses arguments.
fn clear_config_env() {
    static CLEAR: Once = Once::new();
    CLEAR.call_once(|| {
        for var in CONFIG_VARS {
            // SAFETY: every test calls this before reading the environment,
            // and `Once` blocks them until removal has finished.
            unsafe { std::env::remove_var(var) };
        }
    });
}

fn try_parse(args: &[&str]) -> Result<Cli, clap::Error> {
    clear_config_env();
    let mut argv = vec!["vestibule"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv)
}

fn parse(args: &[&str]) -> Cli {
    try_parse(args).expect("arguments parse")
}

#[test]
fn test_run_is_the_default_command() {
    let cli = parse(&["--token", "abc"]);
    assert_eq!(cli.command(), Commands::Run);
}

#[test]
fn test_defaults_produce_default_config() {
    let cli = parse(&[]);
    assert_eq!(cli.token, None);
    assert!(!cli.json_logs);
    let config = cli.portal_config().expect("config builds");
    assert_eq!(config, PortalConfig::default());
    assert_eq!(config.category_prefix(), "client-");
    assert_eq!(config.channel_names(), &vec!["general".to_string(), "files".to_string()]);
}

#[test]
fn test_run_without_token_is_rejected() {
    let cli = parse(&["run"]);
    assert!(cli.token().is_err());
}

#[test]
fn test_json_logs_flag() {
    assert!(parse(&["--json-logs"]).json_logs);
}

#[test]
fn test_flags_override_config() {
    let cli = parse(&[
        "run",
        "--category-prefix",
        "guest-",
        "--channel-names",
        " notes , uploads ,notes",
        "--staff-role-id",
        "123456789012345678",
    ]);
    let config = cli.portal_config().expect("config builds");
    assert_eq!(config.category_prefix(), "guest-");
    assert_eq!(config.channel_names(), &vec!["notes".to_string(), "uploads".to_string()]);
    assert_eq!(*config.staff_role(), Some(Snowflake(123456789012345678)));
}

#[test]
fn test_malformed_staff_role_is_ignored() {
    let cli = parse(&["--staff-role-id", "moderators"]);
    let config = cli.portal_config().expect("config builds");
    assert_eq!(*config.staff_role(), None);
    assert_eq!(cli.raw_staff_role_id(), Some("moderators"));
}

#[test]
fn test_blank_staff_role_is_absent() {
    let cli = parse(&["--staff-role-id", "  "]);
    assert_eq!(cli.raw_staff_role_id(), None);
    assert_eq!(*cli.portal_config().expect("config builds").staff_role(), None);
}

#[test]
fn test_empty_channel_list_still_builds() {
    let cli = parse(&["--channel-names", " , "]);
    let config = cli.portal_config().expect("config builds");
    assert!(config.channel_names().is_empty());
}

#[test]
fn test_blank_token_is_rejected() {
    let cli = parse(&["--token", "   "]);
    let err = cli.token().expect_err("blank token");
    assert!(err.message.contains("DISCORD_TOKEN"));
}

#[test]
fn test_token_is_trimmed() {
    let cli = parse(&["--token", " secret "]);
    assert_eq!(cli.token().expect("token present"), "secret");
}

#[test]
fn test_check_with_sample_member() {
    let cli = parse(&[
        "check",
        "--member-name",
        "Jo.Hn!",
        "--member-id",
        "81234567890127234",
        "--json",
    ]);
    assert_eq!(
        cli.command(),
        Commands::Check {
            member_name: Some("Jo.Hn!".to_string()),
            member_id: Some(81234567890127234),
            json: true,
        }
    );
}

#[test]
fn test_check_sample_requires_both_fields() {
    assert!(try_parse(&["check", "--member-name", "john"]).is_err());
    assert!(try_parse(&["check", "--member-id", "81234567890127234"]).is_err());
}

#[test]
fn test_check_rejects_zero_member_id() {
    assert!(try_parse(&["check", "--member-name", "john", "--member-id", "0"]).is_err());
}

#[test]
fn test_verbose_is_global() {
    let cli = parse(&["check", "--verbose"]);
    assert!(cli.verbose);
}
