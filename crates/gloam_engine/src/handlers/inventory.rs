//! The inventory verb: list carried objects in pickup order.

use gloam_model::GameState;
use gloam_parser::ParsedCommand;
use gloam_world::{Lighting, World};

use crate::handler::CommandHandler;
use crate::narrate::article_for;
use crate::result::CommandResult;

/// No preconditions. Named to avoid clashing with the model's
/// [`gloam_model::Inventory`] container.
pub struct InventoryList;

impl CommandHandler for InventoryList {
    fn execute(
        &self,
        _cmd: &ParsedCommand,
        world: &mut World,
        _state: &mut GameState,
        _lighting: &dyn Lighting,
    ) -> CommandResult {
        let names: Vec<&str> = world
            .inventory()
            .items
            .iter()
            .filter_map(|id| world.object(id))
            .map(|o| o.name.as_str())
            .collect();

        if names.is_empty() {
            return CommandResult::success("You are empty-handed.");
        }

        let mut out = String::from("You are carrying:");
        for name in names {
            out.push_str(&format!("\n  {} {name}", article_for(name)));
        }
        CommandResult::success(out)
    }
}
