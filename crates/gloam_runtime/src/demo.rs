//! A small built-in game for trying the engine.

use gloam_model::{Direction, GameObject, GameState, Location, ObjectFlag, Result, Room, RoomFlag};
use gloam_world::World;

/// Builds the demo world: a sunlit field, a house, and a dark cellar.
///
/// The returned world has passed [`World::validate`], so the session can
/// trust every placement in it.
///
/// # Errors
///
/// Returns an error if the world fails its integrity checks, which would be
/// a bug in this builder.
pub fn demo_world() -> Result<(World, GameState)> {
    let mut world = World::new(100);

    world.add_room(
        Room::new("FIELD", "Open Field", "You are in an open field west of a white house.")
            .with_long_description(
                "You are standing in an open field west of a white house, \
                 with a boarded front door. A path leads north around the house.",
            )
            .with_flag(RoomFlag::Light)
            .with_flag(RoomFlag::Outside)
            .with_exit(Direction::North, "HOUSE")
            .with_blocked_exit(Direction::East, "The front door is boarded shut."),
    )?;
    world.add_room(
        Room::new("HOUSE", "Inside the House", "You are inside the white house.")
            .with_long_description(
                "You are in the living room of the white house. \
                 A dark stairway leads down.",
            )
            .with_flag(RoomFlag::Light)
            .with_exit(Direction::South, "FIELD")
            .with_exit(Direction::Down, "CELLAR"),
    )?;
    // No Light flag: dark unless the player brings the lantern.
    world.add_room(
        Room::new("CELLAR", "Cellar", "You are in a damp cellar.")
            .with_long_description("You are in a damp cellar with a low ceiling.")
            .with_exit(Direction::Up, "HOUSE"),
    )?;

    world.add_object(
        GameObject::new("MAILBOX", "mailbox", "A small wooden mailbox, weathered by rain.")
            .with_adjective("small")
            .with_synonym("box")
            .with_flag(ObjectFlag::Container)
            .with_flag(ObjectFlag::Openable)
            .with_capacity(5),
    )?;
    world.add_object(
        GameObject::new("LEAFLET", "leaflet", "\"Welcome to gloam. Go boldly.\"")
            .with_synonym("paper")
            .with_flag(ObjectFlag::Takeable)
            .with_size(1),
    )?;
    world.add_object(
        GameObject::new("LAMP", "lantern", "A battered brass lantern. It glows steadily.")
            .with_adjective("brass")
            .with_synonym("lamp")
            .with_synonym("light")
            .with_flag(ObjectFlag::Takeable)
            .with_flag(ObjectFlag::Light)
            .with_size(5),
    )?;
    world.add_object(
        GameObject::new("COIN", "coin", "An old coin, green with age.")
            .with_adjective("old")
            .with_flag(ObjectFlag::Takeable)
            .with_size(1),
    )?;

    place(&mut world, "MAILBOX", Location::Room("FIELD".into()))?;
    place(&mut world, "LEAFLET", Location::Container("MAILBOX".into()))?;
    place(&mut world, "LAMP", Location::Room("HOUSE".into()))?;
    place(&mut world, "COIN", Location::Room("CELLAR".into()))?;

    world.validate()?;
    Ok((world, GameState::new("FIELD")))
}

fn place(world: &mut World, id: &str, destination: Location) -> Result<()> {
    if world.move_object(&id.into(), destination) {
        Ok(())
    } else {
        Err(gloam_model::Error::BrokenPlacement {
            object: id.into(),
            detail: "demo placement refused".to_string(),
        })
    }
}
