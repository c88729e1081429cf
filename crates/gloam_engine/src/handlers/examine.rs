//! The examine verb: print an object's description.

use gloam_model::GameState;
use gloam_parser::ParsedCommand;
use gloam_world::{Lighting, World};

use crate::handler::{CommandHandler, not_here, require_object_phrase, resolve_visible};
use crate::result::CommandResult;

/// Preconditions: visible in the room or carried. No mutation.
pub struct Examine;

impl CommandHandler for Examine {
    fn execute(
        &self,
        cmd: &ParsedCommand,
        world: &mut World,
        state: &mut GameState,
        lighting: &dyn Lighting,
    ) -> CommandResult {
        let phrase = match require_object_phrase(cmd, "examine") {
            Ok(phrase) => phrase,
            Err(refusal) => return refusal,
        };
        let Some(id) = resolve_visible(phrase, world, state, lighting) else {
            return not_here();
        };
        match world.object(&id) {
            Some(object) => CommandResult::success(object.description.clone()),
            None => not_here(),
        }
    }
}
