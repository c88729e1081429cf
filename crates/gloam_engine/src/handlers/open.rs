//! The open verb: set the `Open` flag, narrating revealed contents.

use gloam_model::{GameState, ObjectFlag};
use gloam_parser::ParsedCommand;
use gloam_world::{Lighting, World};

use crate::handler::{CommandHandler, not_here, require_object_phrase, resolve_visible};
use crate::narrate;
use crate::result::CommandResult;

/// Preconditions: visible, `Openable`, not `Locked`, not already `Open`.
/// Opening a container with contents names what it reveals.
pub struct Open;

impl CommandHandler for Open {
    fn execute(
        &self,
        cmd: &ParsedCommand,
        world: &mut World,
        state: &mut GameState,
        lighting: &dyn Lighting,
    ) -> CommandResult {
        let phrase = match require_object_phrase(cmd, "open") {
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
            return CommandResult::failure("You can't open that.");
        }
        if object.has_flag(ObjectFlag::Locked) {
            return CommandResult::failure("It's locked.");
        }
        if object.has_flag(ObjectFlag::Open) {
            return CommandResult::failure("It's already open.");
        }
        let name = object.name.clone();
        let revealed: Vec<String> = object
            .contents
            .iter()
            .filter_map(|child| world.object(child))
            .map(|child| child.name.clone())
            .collect();

        if let Some(object) = world.object_mut(&id) {
            object.set_flag(ObjectFlag::Open);
        }

        if revealed.is_empty() {
            CommandResult::success("Opened.")
        } else {
            CommandResult::success(format!(
                "Opening the {name} reveals {}.",
                narrate::item_list(&revealed)
            ))
        }
    }
}
