//! The outcome of executing one command.

/// What a handler hands back to the turn loop.
///
/// Produced once per command execution and consumed immediately by the
/// output layer. A failed result means nothing was mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command took effect.
    pub success: bool,
    /// Narration shown to the player. May be empty when `redisplay_room`
    /// carries the whole response.
    pub message: String,
    /// The caller should print the current room description.
    pub redisplay_room: bool,
}

impl CommandResult {
    /// A successful command with a narration message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            redisplay_room: false,
        }
    }

    /// A refusal. Nothing was mutated.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            redisplay_room: false,
        }
    }

    /// Marks the result as wanting a room redisplay.
    #[must_use]
    pub fn with_room(mut self) -> Self {
        self.redisplay_room = true;
        self
    }
}
