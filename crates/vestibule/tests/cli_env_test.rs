//! Environment-driven configuration.
//!
//! Kept to a single test so nothing else in this binary reads the environment
//! while it is being changed.

use clap::Parser;
use vestibule::Cli;
use vestibule_core::Snowflake;

fn set(var: &str, value: &str) {
    // SAFETY: this binary runs one test, so no other thread reads the environment.
    unsafe { std::env::set_var(var, value) };
}

#[test]
fn test_environment_supplies_configuration() {
    set("DISCORD_TOKEN", "env-token");
    set("STAFF_ROLE_ID", "123456789012345678");
    set("CATEGORY_PREFIX", "guest-");
    set("CHANNEL_NAMES", "notes,uploads");

    for (raw, expected) in [("1", true), ("yes", true), ("true", true), ("0", false), ("off", false)] {
        set("VESTIBULE_JSON_LOGS", raw);
        let cli = Cli::try_parse_from(["vestibule"]).expect("environment parses");
        assert_eq!(cli.json_logs, expected, "VESTIBULE_JSON_LOGS={raw}");
    }

    let cli = Cli::try_parse_from(["vestibule"]).expect("environment parses");
    assert_eq!(cli.token().expect("token from environment"), "env-token");
    let config = cli.portal_config().expect("config builds");
    assert_eq!(config.category_prefix(), "guest-");
    assert_eq!(config.channel_names(), &vec!["notes".to_string(), "uploads".to_string()]);
    assert_eq!(*config.staff_role(), Some(Snowflake(123456789012345678)));

    let cli = Cli::try_parse_from(["vestibule", "--channel-names", "general"])
        .expect("flags parse");
    assert_eq!(
        cli.portal_config().expect("config builds").channel_names(),
        &vec!["general".to_string()]
    );
}
