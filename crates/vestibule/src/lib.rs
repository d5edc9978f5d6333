//! Vestibule - private per-member portals for Discord communities.
//!
//! When a member joins a guild, Vestibule creates a category named after them
//! with a fixed set of text channels that only they (and optionally a staff
//! role) can see. When they leave, the category and its channels are deleted.
//!
//! This crate is the command-line front end: argument and environment parsing,
//! logging setup, and the `run` and `check` commands. The portal logic lives in
//! [`vestibule_core`] and the Discord integration in [`vestibule_discord`].
//!
//! # Configuration
//!
//! | Flag | Environment | Default |
//! |---|---|---|
//! | `--token` | `DISCORD_TOKEN` | required for `run` |
//! | `--staff-role-id` | `STAFF_ROLE_ID` | none |
//! | `--category-prefix` | `CATEGORY_PREFIX` | `client-` |
//! | `--channel-names` | `CHANNEL_NAMES` | `general,files` |
//! | `--json-logs` | `VESTIBULE_JSON_LOGS` | off |
//!
//! A `.env` file in the working directory is loaded first when present.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod check;
mod cli;
mod observability;

pub use check::{CheckReport, PlannedOverwrite, SamplePortal, StaffRoleStatus};
pub use cli::{Cli, Commands};
pub use observability::{LoggingConfig, init_logging};

pub use vestibule_core;
pub use vestibule_discord;
pub use vestibule_error;
