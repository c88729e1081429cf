//! The put verb: move a carried object into an open container.

use tracing::warn;

use gloam_model::{GameState, Location, ObjectFlag};
use gloam_parser::ParsedCommand;
use gloam_world::{Lighting, World};

use crate::handler::{
    CommandHandler, not_here, require_object_phrase, resolve_carried, resolve_visible,
};
use crate::result::CommandResult;

/// Preconditions: the direct object is carried, the indirect object is a
/// visible open container distinct from the direct object, and the contents
/// load leaves room. Mutation: relocate into the container.
pub struct Put;

impl CommandHandler for Put {
    fn execute(
        &self,
        cmd: &ParsedCommand,
        world: &mut World,
        state: &mut GameState,
        lighting: &dyn Lighting,
    ) -> CommandResult {
        let phrase = match require_object_phrase(cmd, "put") {
            Ok(phrase) => phrase,
            Err(refusal) => return refusal,
        };
        let Some(id) = resolve_carried(phrase, world) else {
            return CommandResult::failure("You aren't carrying that.");
        };

        if !matches!(cmd.preposition.as_deref(), Some("in" | "into" | "inside")) {
            return CommandResult::failure("Where do you want to put that?");
        }
        let Some(target_phrase) = cmd.indirect_object.as_deref() else {
            return CommandResult::failure("Where do you want to put that?");
        };
        let Some(target) = resolve_visible(target_phrase, world, state, lighting) else {
            return not_here();
        };
        if target == id {
            return CommandResult::failure("You can't put something inside itself.");
        }

        let Some(container) = world.object(&target) else {
            return not_here();
        };
        if !container.has_flag(ObjectFlag::Container) {
            return CommandResult::failure("You can't put anything in that.");
        }
        if !container.has_flag(ObjectFlag::Open) {
            return CommandResult::failure(format!("The {} is closed.", container.name));
        }
        if !world.can_contain(&target, &id) {
            return CommandResult::failure("It won't fit.");
        }

        let object_name = world.object(&id).map(|o| o.name.clone()).unwrap_or_default();
        let container_name = world
            .object(&target)
            .map(|o| o.name.clone())
            .unwrap_or_default();
        if !world.move_object(&id, Location::Container(target.clone())) {
            warn!(object = %id, container = %target, "put: placement move failed");
            return CommandResult::failure("It won't fit.");
        }
        CommandResult::success(format!(
            "You put the {object_name} in the {container_name}."
        ))
    }
}
