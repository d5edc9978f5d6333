//! Tests for the portal overwrite policy.

use vestibule_core::{
    Capability, MEMBER_CAPABILITIES, Principal, STAFF_CAPABILITIES, Snowflake, portal_overwrites,
};

const EVERYONE: Snowflake = Snowflake(900_000_000_000_000_001);
const MEMBER: Snowflake = Snowflake(81234567890127234);
const STAFF: Snowflake = Snowflake(555_555_555_555_555_555);

#[test]
fn test_everyone_denied_view() {
    let overwrites = portal_overwrites(EVERYONE, MEMBER, None);
    let everyone = &overwrites[0];
    assert_eq!(*everyone.principal(), Principal::Role(EVERYONE));
    assert!(everyone.deny().contains(&Capability::ViewChannel));
    assert!(everyone.allow().is_empty());
}

#[test]
fn test_member_allowed_full_set() {
    let overwrites = portal_overwrites(EVERYONE, MEMBER, None);
    let member = &overwrites[1];
    assert_eq!(*member.principal(), Principal::Member(MEMBER));
    for cap in MEMBER_CAPABILITIES {
        assert!(member.allow().contains(&cap), "member should be allowed {cap}");
    }
    assert!(!member.allow().contains(&Capability::ManageMessages));
    assert!(member.deny().is_empty());
}

#[test]
fn test_staff_included_only_when_resolved() {
    assert_eq!(portal_overwrites(EVERYONE, MEMBER, None).len(), 2);

    let overwrites = portal_overwrites(EVERYONE, MEMBER, Some(STAFF));
    assert_eq!(overwrites.len(), 3);
    let staff = &overwrites[2];
    assert_eq!(*staff.principal(), Principal::Role(STAFF));
    for cap in STAFF_CAPABILITIES {
        assert!(staff.allow().contains(&cap), "staff should be allowed {cap}");
    }
    assert!(!staff.allow().contains(&Capability::AttachFiles));
}
