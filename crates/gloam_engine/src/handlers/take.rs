//! The take verb: move a visible object into the inventory.

use tracing::warn;

use gloam_model::{GameState, Location, ObjectFlag};
use gloam_parser::ParsedCommand;
use gloam_world::{Lighting, World};

use crate::handler::{CommandHandler, not_here, require_object_phrase, resolve_carried};
use crate::result::CommandResult;

/// Preconditions: visible in the room, `Takeable`, and within the carry
/// ceiling. Mutation: relocate to the player.
pub struct Take;

impl CommandHandler for Take {
    fn execute(
        &self,
        cmd: &ParsedCommand,
        world: &mut World,
        state: &mut GameState,
        lighting: &dyn Lighting,
    ) -> CommandResult {
        let phrase = match require_object_phrase(cmd, "take") {
            Ok(phrase) => phrase,
            Err(refusal) => return refusal,
        };

        if resolve_carried(phrase, world).is_some() {
            return CommandResult::failure("You're already carrying that.");
        }

        let Some(found) = world.find_in_room(&state.current_room, phrase, lighting) else {
            return not_here();
        };
        if !found.has_flag(ObjectFlag::Takeable) {
            return CommandResult::failure("You can't take that.");
        }
        let id = found.id.clone();
        let size = found.size;

        if world.inventory().would_exceed(world.carried_load(), size) {
            return CommandResult::failure("You're carrying too much already.");
        }

        if !world.move_object(&id, Location::Player) {
            warn!(object = %id, "take: placement move failed on a validated world");
            return CommandResult::failure("You can't take that.");
        }
        CommandResult::success("Taken.")
    }
}
