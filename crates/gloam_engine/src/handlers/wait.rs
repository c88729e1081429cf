//! The wait verb: let a turn pass.

use gloam_model::GameState;
use gloam_parser::ParsedCommand;
use gloam_world::{Lighting, World};

use crate::handler::CommandHandler;
use crate::result::CommandResult;

/// No preconditions, no mutation; the turn counter still advances.
pub struct Wait;

impl CommandHandler for Wait {
    fn execute(
        &self,
        _cmd: &ParsedCommand,
        _world: &mut World,
        _state: &mut GameState,
        _lighting: &dyn Lighting,
    ) -> CommandResult {
        CommandResult::success("Time passes.")
    }
}
