//! The look verb: redescribe the current room.

use gloam_model::GameState;
use gloam_parser::ParsedCommand;
use gloam_world::{Lighting, World};

use crate::handler::CommandHandler;
use crate::result::CommandResult;

/// No preconditions; the turn loop prints the room description.
pub struct Look;

impl CommandHandler for Look {
    fn execute(
        &self,
        _cmd: &ParsedCommand,
        _world: &mut World,
        _state: &mut GameState,
        _lighting: &dyn Lighting,
    ) -> CommandResult {
        CommandResult::success("").with_room()
    }
}
