//! Portal configuration.
//!
//! Built once at startup and shared as `Arc<PortalConfig>`. Nothing in this
//! crate reads the process environment; the binary owns that.

use crate::Snowflake;
use derive_getters::Getters;
use serde::Serialize;

/// Category prefix used when none is configured.
pub const DEFAULT_CATEGORY_PREFIX: &str = "client-";

/// Channel list used when none is configured.
pub const DEFAULT_CHANNEL_NAMES: &str = "general,files";

/// Immutable portal settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct PortalConfig {
    /// Prepended to every generated category name.
    #[builder(default = "DEFAULT_CATEGORY_PREFIX.to_string()")]
    category_prefix: String,

    /// Text channels created under each portal category, in order.
    #[builder(default = "parse_channel_names(DEFAULT_CHANNEL_NAMES)")]
    channel_names: Vec<String>,

    /// Role granted visibility into every portal, if any.
    #[builder(default)]
    staff_role: Option<Snowflake>,
}

impl PortalConfig {
    /// Start building a configuration.
    pub fn builder() -> PortalConfigBuilder {
        PortalConfigBuilder::default()
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            category_prefix: DEFAULT_CATEGORY_PREFIX.to_string(),
            channel_names: parse_channel_names(DEFAULT_CHANNEL_NAMES),
            staff_role: None,
        }
    }
}

/// Split a comma-separated channel list.
///
/// Entries are trimmed, empty entries dropped, and repeated names keep only
/// their first occurrence.
///
/// ```
/// use vestibule_core::parse_channel_names;
///
/// assert_eq!(parse_channel_names(" General, ,Files,General"), vec!["General", "Files"]);
/// assert!(parse_channel_names(" , ").is_empty());
/// ```
pub fn parse_channel_names(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Parse a staff role identifier.
///
/// Only 17 to 20 ASCII digits naming a nonzero id are accepted; anything
/// else yields `None`.
///
/// ```
/// use vestibule_core::{parse_staff_role_id, Snowflake};
///
/// assert_eq!(parse_staff_role_id("123456789012345678"), Some(Snowflake(123456789012345678)));
/// assert_eq!(parse_staff_role_id("staff"), None);
/// ```
pub fn parse_staff_role_id(raw: &str) -> Option<Snowflake> {
    let raw = raw.trim();
    if !(17..=20).contains(&raw.len()) || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(Snowflake)
}
