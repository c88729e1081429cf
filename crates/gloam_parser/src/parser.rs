//! The main parse pipeline.
//!
//! Orchestrates tokenization, stop-word filtering, verb canonicalization,
//! and the preposition split. Entirely static grammar: no knowledge of the
//! current room or any object state.

use thiserror::Error;

use gloam_model::Direction;

use crate::command::ParsedCommand;
use crate::tokenizer::Tokenizer;
use crate::vocabulary::Vocabulary;

/// A parse failure. The `Display` text is shown to the player verbatim.
///
/// Parse failures are not turns: the caller must leave the move counter and
/// all game state untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Empty or whitespace-only input.
    #[error("Please type a command.")]
    Empty,
    /// The first word is not a known verb.
    #[error("I don't understand the word \"{0}\".")]
    UnknownWord(String),
}

/// Turns one line of player input into a [`ParsedCommand`].
#[derive(Clone, Debug)]
pub struct CommandParser {
    vocabulary: Vocabulary,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(Vocabulary::standard())
    }
}

impl CommandParser {
    /// Creates a parser over the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary in use.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Mutable access, for registering game-specific verbs.
    pub fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        &mut self.vocabulary
    }

    /// Parses one input line.
    ///
    /// Grammar, in order:
    /// 1. Tokenize and drop stop words; nothing left is [`ParseError::Empty`].
    /// 2. "look at X" collapses to `examine X` before generic verb lookup.
    /// 3. A bare direction word ("north", "n", "up") becomes `go` with the
    ///    canonical direction as the direct object.
    /// 4. The first token resolves through the verb-synonym table; an
    ///    unknown word is [`ParseError::UnknownWord`].
    /// 5. The remaining tokens split at the first known preposition into
    ///    the direct- and indirect-object phrases.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] carrying the user-facing message.
    pub fn parse(&self, input: &str) -> Result<ParsedCommand, ParseError> {
        let tokens: Vec<String> = Tokenizer::tokenize(input)
            .into_iter()
            .filter(|t| !self.vocabulary.is_stop_word(t))
            .collect();

        let Some(first) = tokens.first() else {
            return Err(ParseError::Empty);
        };

        // "look at X" is an examine idiom, matched before single-token lookup.
        if first == "look" && tokens.get(1).map(String::as_str) == Some("at") {
            return Ok(Self::split_objects(
                "examine".to_string(),
                &tokens[2..],
                &self.vocabulary,
            ));
        }

        // A bare direction is shorthand for "go <direction>".
        if tokens.len() == 1 {
            if let Some(direction) = Direction::from_word(first) {
                return Ok(ParsedCommand::with_object("go", direction.name()));
            }
        }

        let Some(verb) = self.vocabulary.lookup_verb(first) else {
            return Err(ParseError::UnknownWord(first.clone()));
        };
        let verb = verb.to_string();

        // "pick up X" / "take up X": the particle is part of the verb.
        let mut rest = &tokens[1..];
        if verb == "take" && rest.first().map(String::as_str) == Some("up") {
            rest = &rest[1..];
        }

        Ok(Self::split_objects(verb, rest, &self.vocabulary))
    }

    /// Splits the tokens after the verb at the first preposition.
    fn split_objects(verb: String, rest: &[String], vocabulary: &Vocabulary) -> ParsedCommand {
        let phrase = |tokens: &[String]| -> Option<String> {
            if tokens.is_empty() {
                None
            } else {
                Some(tokens.join(" "))
            }
        };

        match rest.iter().position(|t| vocabulary.is_preposition(t)) {
            Some(at) => ParsedCommand {
                verb,
                direct_object: phrase(&rest[..at]),
                preposition: Some(rest[at].clone()),
                indirect_object: phrase(&rest[at + 1..]),
            },
            None => ParsedCommand {
                verb,
                direct_object: phrase(rest),
                preposition: None,
                indirect_object: None,
            },
        }
    }
}
