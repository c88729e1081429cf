//! Player-input parser for the gloam interactive-fiction engine.
//!
//! Turns one line of free-form input into a [`ParsedCommand`] — or a typed
//! [`ParseError`] whose `Display` is the user-facing refusal — using static
//! grammar rules only. The parser knows verbs, prepositions, directions, and
//! stop words; it knows nothing about rooms or objects. Object phrases come
//! out raw, and resolving them against the world is the dispatch layer's
//! job.
//!
//! # Pipeline
//!
//! ```text
//! "take the brass lamp"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["take", "the", "brass", "lamp"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ STOP WORDS      │  → ["take", "brass", "lamp"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VERB LOOKUP     │  → canonical verb "take"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PREPOSITION     │  → direct object "brass lamp", no indirect object
//! │ SPLIT           │
//! └─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod parser;
pub mod tokenizer;
pub mod vocabulary;

pub use command::ParsedCommand;
pub use parser::{CommandParser, ParseError};
pub use vocabulary::Vocabulary;
