//! Room, direction, and exit tests.

use gloam_model::{Direction, Exit, Room, RoomFlag};

#[test]
fn direction_words_include_abbreviations() {
    assert_eq!(Direction::from_word("north"), Some(Direction::North));
    assert_eq!(Direction::from_word("n"), Some(Direction::North));
    assert_eq!(Direction::from_word("SW"), Some(Direction::Southwest));
    assert_eq!(Direction::from_word("d"), Some(Direction::Down));
    assert_eq!(Direction::from_word("enter"), Some(Direction::In));
    assert_eq!(Direction::from_word("sideways"), None);
}

#[test]
fn direction_names_round_trip() {
    for direction in [
        Direction::North,
        Direction::Southeast,
        Direction::Up,
        Direction::Out,
    ] {
        assert_eq!(Direction::from_word(direction.name()), Some(direction));
    }
}

#[test]
fn exits_distinguish_open_and_blocked() {
    let room = Room::new("FIELD", "Field", "A field.")
        .with_flag(RoomFlag::Light)
        .with_exit(Direction::North, "HOUSE")
        .with_blocked_exit(Direction::East, "The door is boarded.");

    assert_eq!(room.exit(Direction::North), Some(&Exit::To("HOUSE".into())));
    assert_eq!(
        room.exit(Direction::East),
        Some(&Exit::Blocked("The door is boarded.".to_string()))
    );
    assert_eq!(room.exit(Direction::West), None);
}

#[test]
fn rooms_default_to_dark() {
    let room = Room::new("CAVE", "Cave", "A cave.");
    assert!(!room.has_flag(RoomFlag::Light));
}
