//! Placement tests across rooms, containers, and the player.

use gloam_model::{GameObject, Location, ObjectFlag, ObjectId, Room, RoomFlag};
use gloam_world::World;

fn world() -> World {
    let mut world = World::new(100);
    world
        .add_room(Room::new("DECK", "Deck", "A ship's deck.").with_flag(RoomFlag::Light))
        .unwrap();
    world
        .add_object(
            GameObject::new("CHEST", "chest", "A sea chest.")
                .with_flag(ObjectFlag::Container)
                .with_flag(ObjectFlag::Openable)
                .with_flag(ObjectFlag::Open)
                .with_capacity(10),
        )
        .unwrap();
    world
        .add_object(
            GameObject::new("MAP", "map", "A treasure map.")
                .with_flag(ObjectFlag::Takeable)
                .with_size(1),
        )
        .unwrap();
    assert!(world.move_object(&"CHEST".into(), Location::Room("DECK".into())));
    assert!(world.move_object(&"MAP".into(), Location::Container("CHEST".into())));
    world.validate().unwrap();
    world
}

#[test]
fn full_circuit_room_container_player() {
    let mut world = world();
    let map = ObjectId::new("MAP");

    assert!(world.move_object(&map, Location::Player));
    assert!(world.inventory().contains(&map));
    assert!(world.object(&"CHEST".into()).unwrap().contents.is_empty());

    assert!(world.move_object(&map, Location::Room("DECK".into())));
    assert!(!world.inventory().contains(&map));
    assert!(world.room(&"DECK".into()).unwrap().items.contains(&map));

    assert!(world.move_object(&map, Location::Container("CHEST".into())));
    assert_eq!(
        world.object(&map).unwrap().location,
        Location::Container("CHEST".into())
    );
    world.validate().unwrap();
}

#[test]
fn nowhere_removes_an_object_from_play() {
    let mut world = world();

    assert!(world.move_object(&"MAP".into(), Location::Nowhere));

    assert_eq!(
        world.object(&"MAP".into()).unwrap().location,
        Location::Nowhere
    );
    assert!(world.object(&"CHEST".into()).unwrap().contents.is_empty());
    world.validate().unwrap();
}

#[test]
fn refused_moves_leave_the_world_intact() {
    let mut world = world();

    assert!(!world.move_object(&"MAP".into(), Location::Room("BRIG".into())));

    assert_eq!(
        world.object(&"MAP".into()).unwrap().location,
        Location::Container("CHEST".into())
    );
    world.validate().unwrap();
}
