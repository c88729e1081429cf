//! The lighting collaborator.
//!
//! Whether a room is lit is game logic (light sources, timers, spells) and
//! lives outside the core. The world only asks the question; implementations
//! answer it however they like.

use gloam_model::{ObjectFlag, RoomFlag, RoomId};

use crate::world::World;

/// Answers "is this room lit?" for visibility queries.
pub trait Lighting {
    /// True if the player can see in `room`.
    fn is_room_lit(&self, world: &World, room: &RoomId) -> bool;
}

/// Flag-driven lighting: a room is lit if it is intrinsically lit, or if a
/// light-emitting object is present in it or carried by the player.
///
/// This is the default collaborator for games without lighting timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlagLighting;

impl Lighting for FlagLighting {
    fn is_room_lit(&self, world: &World, room: &RoomId) -> bool {
        let Some(room) = world.room(room) else {
            return false;
        };
        if room.has_flag(RoomFlag::Light) {
            return true;
        }

        let emits = |id| {
            world
                .object(id)
                .is_some_and(|o| o.has_flag(ObjectFlag::Light))
        };
        room.items.iter().any(emits) || world.inventory().items.iter().any(emits)
    }
}

/// Lighting stub that always answers yes. Handy in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysLit;

impl Lighting for AlwaysLit {
    fn is_room_lit(&self, _world: &World, _room: &RoomId) -> bool {
        true
    }
}
