//! One playthrough: world, state, parser, and dispatcher together.

use tracing::debug;

use gloam_engine::{Dispatcher, narrate};
use gloam_model::GameState;
use gloam_parser::CommandParser;
use gloam_world::{FlagLighting, Lighting, World};

/// Everything one game session owns.
///
/// The session drives the turn cycle: parse the line, dispatch the command,
/// count the turn, and narrate. A parse failure short-circuits before
/// dispatch and does not count as a turn; a refused command still does.
pub struct Session {
    world: World,
    state: GameState,
    parser: CommandParser,
    dispatcher: Dispatcher,
    lighting: Box<dyn Lighting>,
}

impl Session {
    /// Creates a session over a built world with the standard parser,
    /// dispatcher, and flag-based lighting.
    #[must_use]
    pub fn new(world: World, state: GameState) -> Self {
        Self {
            world,
            state,
            parser: CommandParser::default(),
            dispatcher: Dispatcher::standard(),
            lighting: Box::new(FlagLighting),
        }
    }

    /// Swaps in a different lighting policy.
    #[must_use]
    pub fn with_lighting(mut self, lighting: Box<dyn Lighting>) -> Self {
        self.lighting = lighting;
        self
    }

    /// Returns a reference to the world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Returns a reference to the session state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Describes the current room and marks it visited, for session start
    /// and for every room redisplay.
    pub fn describe_here(&mut self) -> String {
        let text = narrate::room_description(&self.world, &self.state, self.lighting.as_ref());
        self.state.mark_visited();
        text
    }

    /// Runs one full turn for a line of player input and returns the text
    /// to show.
    pub fn execute_line(&mut self, line: &str) -> String {
        let cmd = match self.parser.parse(line) {
            Ok(cmd) => cmd,
            // Not a turn: the world and the move counter are untouched.
            Err(parse_error) => return parse_error.to_string(),
        };
        debug!(verb = %cmd.verb, "executing turn");

        let result =
            self.dispatcher
                .dispatch(&cmd, &mut self.world, &mut self.state, self.lighting.as_ref());
        self.state.advance_turn();

        let mut out = result.message;
        if result.redisplay_room {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&self.describe_here());
        }
        out
    }
}
