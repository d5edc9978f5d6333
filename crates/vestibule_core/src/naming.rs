//! Category naming policy.
//!
//! A portal category is named `{prefix}{sanitized name}-{identity suffix}`.
//! The suffix comes from the immutable member id, so it still identifies the
//! owner after a rename; the sanitized name is only a readability aid.

use crate::{PortalMember, Snowflake};

/// Number of trailing id characters embedded in category names.
pub const IDENTITY_SUFFIX_LEN: usize = 4;

/// Keep only `[a-zA-Z0-9-_]` and lowercase the rest.
///
/// ```
/// use vestibule_core::sanitize_display_name;
///
/// assert_eq!(sanitize_display_name("Jo.Hn!"), "john");
/// assert_eq!(sanitize_display_name("Some_Body-2"), "some_body-2");
/// assert_eq!(sanitize_display_name("☃☃☃"), "");
/// ```
pub fn sanitize_display_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Last [`IDENTITY_SUFFIX_LEN`] characters of the id's decimal form.
///
/// Ids shorter than that are used whole.
pub fn identity_suffix(id: Snowflake) -> String {
    let digits = id.to_string();
    let start = digits.len().saturating_sub(IDENTITY_SUFFIX_LEN);
    digits[start..].to_string()
}

/// The deterministic category name for a member.
///
/// ```
/// use vestibule_core::{category_name_for, PortalMember};
///
/// let member = PortalMember::new(81234567890127234u64, "Jo.Hn!");
/// assert_eq!(category_name_for("client-", &member), "client-john-7234");
/// ```
pub fn category_name_for(prefix: &str, member: &PortalMember) -> String {
    format!(
        "{}{}-{}",
        prefix,
        sanitize_display_name(member.display_name()),
        identity_suffix(*member.id())
    )
}

/// Whether a category name carries the prefix and this member's identity suffix.
///
/// This is the weak, name-only ownership test used when no category carries an
/// overwrite for the member.
pub fn matches_identity_suffix(prefix: &str, name: &str, member: Snowflake) -> bool {
    let suffix = format!("-{}", identity_suffix(member));
    name.starts_with(prefix) && name.ends_with(&suffix)
}
