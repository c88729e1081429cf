//! The verb → handler table.

use std::collections::HashMap;

use tracing::debug;

use gloam_model::GameState;
use gloam_parser::ParsedCommand;
use gloam_world::{Lighting, World};

use crate::handler::CommandHandler;
use crate::handlers;
use crate::result::CommandResult;

/// Routes parsed commands to their verb handlers.
///
/// Populated once at startup. A verb that parses but has no registered
/// handler is a normal, non-fatal outcome — the player simply gets told the
/// engine doesn't know how to do that, which is distinct from the parser's
/// unknown-word refusal.
pub struct Dispatcher {
    handlers: HashMap<String, Box<dyn CommandHandler>>,
}

impl Dispatcher {
    /// Creates an empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// The standard verb set.
    #[must_use]
    pub fn standard() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register("take", Box::new(handlers::take::Take));
        dispatcher.register("drop", Box::new(handlers::drop::Drop));
        dispatcher.register("open", Box::new(handlers::open::Open));
        dispatcher.register("close", Box::new(handlers::close::Close));
        dispatcher.register("look", Box::new(handlers::look::Look));
        dispatcher.register("examine", Box::new(handlers::examine::Examine));
        dispatcher.register("inventory", Box::new(handlers::inventory::InventoryList));
        dispatcher.register("go", Box::new(handlers::go::Go));
        dispatcher.register("put", Box::new(handlers::put::Put));
        dispatcher.register("wait", Box::new(handlers::wait::Wait));
        dispatcher
    }

    /// Registers a handler for a canonical verb, replacing any existing one.
    pub fn register(&mut self, verb: impl Into<String>, handler: Box<dyn CommandHandler>) {
        self.handlers.insert(verb.into(), handler);
    }

    /// True if `verb` has a handler.
    #[must_use]
    pub fn has_handler(&self, verb: &str) -> bool {
        self.handlers.contains_key(verb)
    }

    /// Executes the command against the session's world and state.
    pub fn dispatch(
        &self,
        cmd: &ParsedCommand,
        world: &mut World,
        state: &mut GameState,
        lighting: &dyn Lighting,
    ) -> CommandResult {
        debug!(verb = %cmd.verb, object = ?cmd.direct_object, "dispatching command");

        match self.handlers.get(&cmd.verb) {
            Some(handler) => handler.execute(cmd, world, state, lighting),
            None => CommandResult::failure("I don't know how to do that."),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::standard()
    }
}
