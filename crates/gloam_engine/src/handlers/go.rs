//! The go verb: follow an exit to another room.

use tracing::warn;

use gloam_model::{Direction, Exit, GameState};
use gloam_parser::ParsedCommand;
use gloam_world::{Lighting, World};

use crate::handler::CommandHandler;
use crate::result::CommandResult;

/// Moves the player along an exit. The direction word may arrive as the
/// direct object ("go north") or, for phrasings like "go in", as the
/// preposition.
pub struct Go;

impl CommandHandler for Go {
    fn execute(
        &self,
        cmd: &ParsedCommand,
        world: &mut World,
        state: &mut GameState,
        lighting: &dyn Lighting,
    ) -> CommandResult {
        let Some(word) = cmd.direct_object.as_deref().or(cmd.preposition.as_deref()) else {
            return CommandResult::failure("Which way do you want to go?");
        };
        let Some(direction) = Direction::from_word(word) else {
            return CommandResult::failure("You can't go that way.");
        };

        let Some(room) = world.room(&state.current_room) else {
            warn!(room = %state.current_room, "go: current room missing from the registry");
            return CommandResult::failure("You can't go that way.");
        };
        match room.exit(direction) {
            None => CommandResult::failure("You can't go that way."),
            Some(Exit::Blocked(message)) => CommandResult::failure(message.clone()),
            Some(Exit::To(destination)) => {
                let destination = destination.clone();
                if world.room(&destination).is_none() {
                    warn!(room = %destination, "go: exit leads to an unregistered room");
                    return CommandResult::failure("You can't go that way.");
                }
                state.current_room = destination;
                state.in_darkness = !lighting.is_room_lit(world, &state.current_room);
                CommandResult::success("").with_room()
            }
        }
    }
}
