//! The drop verb: move a carried object into the current room.

use tracing::warn;

use gloam_model::{GameState, Location};
use gloam_parser::ParsedCommand;
use gloam_world::{Lighting, World};

use crate::handler::{CommandHandler, require_object_phrase, resolve_carried};
use crate::result::CommandResult;

/// Precondition: the object must be carried. Mutation: relocate to the
/// current room.
pub struct Drop;

impl CommandHandler for Drop {
    fn execute(
        &self,
        cmd: &ParsedCommand,
        world: &mut World,
        state: &mut GameState,
        _lighting: &dyn Lighting,
    ) -> CommandResult {
        let phrase = match require_object_phrase(cmd, "drop") {
            Ok(phrase) => phrase,
            Err(refusal) => return refusal,
        };

        let Some(id) = resolve_carried(phrase, world) else {
            return CommandResult::failure("You aren't carrying that.");
        };

        if !world.move_object(&id, Location::Room(state.current_room.clone())) {
            warn!(object = %id, room = %state.current_room, "drop: placement move failed");
            return CommandResult::failure("You can't drop that here.");
        }
        CommandResult::success("Dropped.")
    }
}
