//! Permission policy for portal categories and channels.

use crate::{Capability, Overwrite, Principal, Snowflake};

/// What the portal owner may do in their channels.
pub const MEMBER_CAPABILITIES: [Capability; 5] = [
    Capability::ViewChannel,
    Capability::SendMessages,
    Capability::ReadMessageHistory,
    Capability::AttachFiles,
    Capability::EmbedLinks,
];

/// What the staff role may do in every portal.
pub const STAFF_CAPABILITIES: [Capability; 4] = [
    Capability::ViewChannel,
    Capability::SendMessages,
    Capability::ReadMessageHistory,
    Capability::ManageMessages,
];

/// Build the ordered overwrite list for a member's portal.
///
/// `staff_role` must already be resolved against the guild's current roles;
/// pass `None` when no staff role is configured or the configured one no
/// longer exists.
///
/// ```
/// use vestibule_core::{portal_overwrites, Principal, Snowflake};
///
/// let overwrites = portal_overwrites(Snowflake(1), Snowflake(2), None);
/// assert_eq!(overwrites.len(), 2);
/// assert_eq!(*overwrites[0].principal(), Principal::Role(Snowflake(1)));
/// assert_eq!(*overwrites[1].principal(), Principal::Member(Snowflake(2)));
/// ```
pub fn portal_overwrites(
    everyone_role: Snowflake,
    member: Snowflake,
    staff_role: Option<Snowflake>,
) -> Vec<Overwrite> {
    let mut overwrites = vec![
        Overwrite::denying(Principal::Role(everyone_role), [Capability::ViewChannel]),
        Overwrite::allowing(Principal::Member(member), MEMBER_CAPABILITIES),
    ];
    if let Some(staff) = staff_role {
        overwrites.push(Overwrite::allowing(Principal::Role(staff), STAFF_CAPABILITIES));
    }
    overwrites
}
