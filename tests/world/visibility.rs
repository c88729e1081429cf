//! Visibility and lighting tests.

use gloam_model::{GameObject, Location, ObjectFlag, Room, RoomFlag, RoomId};
use gloam_world::{AlwaysLit, FlagLighting, Lighting, World};

fn cave_world() -> World {
    let mut world = World::new(100);
    world.add_room(Room::new("CAVE", "Cave", "A dark cave.")).unwrap();
    world
        .add_object(
            GameObject::new("GEM", "gem", "A glittering gem.").with_flag(ObjectFlag::Takeable),
        )
        .unwrap();
    world
        .add_object(
            GameObject::new("LAMP", "lantern", "A lantern.")
                .with_flag(ObjectFlag::Takeable)
                .with_flag(ObjectFlag::Light),
        )
        .unwrap();
    assert!(world.move_object(&"GEM".into(), Location::Room("CAVE".into())));
    world
}

#[test]
fn flag_lighting_respects_the_room_flag() {
    let world = cave_world();
    let cave = RoomId::new("CAVE");

    assert!(!FlagLighting.is_room_lit(&world, &cave));
    assert!(world.visible_in_room(&cave, &FlagLighting).is_empty());
    assert!(AlwaysLit.is_room_lit(&world, &cave));
}

#[test]
fn a_carried_light_source_lights_the_room() {
    let mut world = cave_world();
    assert!(world.move_object(&"LAMP".into(), Location::Player));

    assert!(FlagLighting.is_room_lit(&world, &RoomId::new("CAVE")));
    assert!(world.find_in_room(&"CAVE".into(), "gem", &FlagLighting).is_some());
}

#[test]
fn a_light_source_in_the_room_lights_it() {
    let mut world = cave_world();
    assert!(world.move_object(&"LAMP".into(), Location::Room("CAVE".into())));

    assert!(FlagLighting.is_room_lit(&world, &RoomId::new("CAVE")));
}

#[test]
fn lit_rooms_stay_lit_without_a_lamp() {
    let mut world = World::new(100);
    world
        .add_room(Room::new("HALL", "Hall", "A hall.").with_flag(RoomFlag::Light))
        .unwrap();

    assert!(FlagLighting.is_room_lit(&world, &RoomId::new("HALL")));
}

#[test]
fn global_items_are_visible_after_room_items() {
    let mut world = World::new(100);
    world
        .add_room(
            Room::new("YARD", "Yard", "A yard.")
                .with_flag(RoomFlag::Light)
                .with_global_item("HOUSE"),
        )
        .unwrap();
    world
        .add_object(GameObject::new("HOUSE", "house", "A white house.").with_flag(ObjectFlag::Scenery))
        .unwrap();
    world
        .add_object(GameObject::new("BALL", "ball", "A red ball.").with_flag(ObjectFlag::Takeable))
        .unwrap();
    assert!(world.move_object(&"BALL".into(), Location::Room("YARD".into())));

    let names: Vec<&str> = world
        .visible_in_room(&"YARD".into(), &FlagLighting)
        .iter()
        .map(|o| o.name.as_str())
        .collect();
    assert_eq!(names, vec!["ball", "house"]);
}
