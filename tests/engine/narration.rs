//! Room narration tests.

use gloam_engine::narrate::{self, DARKNESS};
use gloam_model::{GameObject, GameState, Location, ObjectFlag, Room, RoomFlag};
use gloam_world::{FlagLighting, World};

fn fixture() -> (World, GameState) {
    let mut world = World::new(100);
    world
        .add_room(
            Room::new("GARDEN", "Garden", "You are in the garden.")
                .with_long_description("You are in a walled garden, heavy with roses.")
                .with_flag(RoomFlag::Light),
        )
        .unwrap();
    (world, GameState::new("GARDEN"))
}

#[test]
fn long_description_only_on_first_visit() {
    let (world, mut state) = fixture();

    let first = narrate::room_description(&world, &state, &FlagLighting);
    assert!(first.starts_with("Garden\n"));
    assert!(first.contains("heavy with roses"));

    state.mark_visited();
    let later = narrate::room_description(&world, &state, &FlagLighting);
    assert!(later.contains("You are in the garden."));
    assert!(!later.contains("heavy with roses"));
}

#[test]
fn dark_rooms_narrate_only_darkness() {
    let (mut world, state) = fixture();
    world
        .room_mut(&"GARDEN".into())
        .unwrap()
        .flags
        .remove(RoomFlag::Light);

    assert_eq!(
        narrate::room_description(&world, &state, &FlagLighting),
        DARKNESS
    );
}

#[test]
fn visible_items_are_listed_with_articles() {
    let (mut world, state) = fixture();
    for (id, name) in [("SPADE", "spade"), ("URN", "urn")] {
        world
            .add_object(GameObject::new(id, name, "").with_flag(ObjectFlag::Takeable))
            .unwrap();
        assert!(world.move_object(&id.into(), Location::Room("GARDEN".into())));
    }

    let text = narrate::room_description(&world, &state, &FlagLighting);
    assert!(text.ends_with("You can see a spade and an urn here."));
}

#[test]
fn item_list_serial_comma() {
    let names: Vec<String> = ["spade", "urn", "acorn"]
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        narrate::item_list(&names),
        "a spade, an urn, and an acorn"
    );
}
