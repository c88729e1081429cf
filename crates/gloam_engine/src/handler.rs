//! The command-handler contract and shared resolution helpers.

use gloam_model::{GameState, ObjectId};
use gloam_parser::ParsedCommand;
use gloam_world::{Lighting, World};

use crate::result::CommandResult;

/// One canonical verb's precondition-check / mutate / narrate logic.
///
/// Handlers receive the parsed command and the session's world and state.
/// Side effects are confined to the target object's flags and location, the
/// inventory, and the returned message — never unrelated objects or rooms.
pub trait CommandHandler {
    /// Executes the verb for one turn.
    fn execute(
        &self,
        cmd: &ParsedCommand,
        world: &mut World,
        state: &mut GameState,
        lighting: &dyn Lighting,
    ) -> CommandResult;
}

/// Extracts the required direct-object phrase, or the standard
/// "What do you want to …?" refusal.
///
/// # Errors
///
/// Returns the refusal as a ready-made [`CommandResult`].
pub fn require_object_phrase<'a>(
    cmd: &'a ParsedCommand,
    verb: &str,
) -> Result<&'a str, CommandResult> {
    cmd.direct_object
        .as_deref()
        .ok_or_else(|| CommandResult::failure(format!("What do you want to {verb}?")))
}

/// Resolves a noun phrase against the current room, then the inventory.
///
/// Returns the object's id; the id is cloned out so callers can go on to
/// mutate the world.
#[must_use]
pub fn resolve_visible(
    phrase: &str,
    world: &World,
    state: &GameState,
    lighting: &dyn Lighting,
) -> Option<ObjectId> {
    world
        .find_in_room(&state.current_room, phrase, lighting)
        .or_else(|| world.find_in_inventory(phrase))
        .map(|o| o.id.clone())
}

/// Resolves a noun phrase against the inventory only.
#[must_use]
pub fn resolve_carried(phrase: &str, world: &World) -> Option<ObjectId> {
    world.find_in_inventory(phrase).map(|o| o.id.clone())
}

/// The standard refusal when a phrase resolves to nothing.
#[must_use]
pub fn not_here() -> CommandResult {
    CommandResult::failure("You don't see that here.")
}
