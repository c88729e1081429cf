//! Flag set tests.

use gloam_model::{ObjectFlag, ObjectFlags, RoomFlag, RoomFlags};

#[test]
fn object_flags_insert_and_remove() {
    let mut flags = ObjectFlags::empty();
    assert!(!flags.contains(ObjectFlag::Open));

    flags.insert(ObjectFlag::Open);
    flags.insert(ObjectFlag::Container);
    assert!(flags.contains(ObjectFlag::Open));
    assert!(flags.contains(ObjectFlag::Container));
    assert!(!flags.contains(ObjectFlag::Locked));

    flags.remove(ObjectFlag::Open);
    assert!(!flags.contains(ObjectFlag::Open));
    assert!(flags.contains(ObjectFlag::Container));
}

#[test]
fn object_flags_build_with_or() {
    let flags = ObjectFlags::empty().with(ObjectFlag::Takeable) | ObjectFlag::Light;

    assert!(flags.contains(ObjectFlag::Takeable));
    assert!(flags.contains(ObjectFlag::Light));
    assert!(!flags.contains(ObjectFlag::Weapon));
}

#[test]
fn removing_an_absent_flag_is_a_no_op() {
    let mut flags = ObjectFlags::empty().with(ObjectFlag::Visible);
    flags.remove(ObjectFlag::Locked);

    assert!(flags.contains(ObjectFlag::Visible));
}

#[test]
fn room_flags_are_independent() {
    let mut flags = RoomFlags::empty();
    flags.insert(RoomFlag::Light);

    assert!(flags.contains(RoomFlag::Light));
    assert!(!flags.contains(RoomFlag::Outside));
}
