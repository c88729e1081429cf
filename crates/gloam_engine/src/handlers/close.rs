//! The close verb: clear the `Open` flag.

use gloam_model::{GameState, ObjectFlag};
use gloam_parser::ParsedCommand;
use gloam_world::{Lighting, World};

use crate::handler::{CommandHandler, not_here, require_object_phrase, resolve_visible};
use crate::result::CommandResult;

/// Preconditions: visible, `Openable`, currently `Open`.
pub struct Close;

impl CommandHandler for Close {
    fn execute(
        &self,
        cmd: &ParsedCommand,
        world: &mut World,
        state: &mut GameState,
        lighting: &dyn Lighting,
    ) -> CommandResult {
        let phrase = match require_object_phrase(cmd, "close") {
            Ok(phrase) => phrase,
            Err(refusal) => return refusal,
        };
        let Some(id) = resolve_visible(phrase, world, state, lighting) else {
            return not_here();
        };

        let Some(object) = world.object(&id) else {
            return not_here();
        };
        if !object.has_flag(ObjectFlag::Openable) {
            return CommandResult::failure("You can't close that.");
        }
        if !object.has_flag(ObjectFlag::Open) {
            return CommandResult::failure("It's already closed.");
        }

        if let Some(object) = world.object_mut(&id) {
            object.clear_flag(ObjectFlag::Open);
        }
        CommandResult::success("Closed.")
    }
}
