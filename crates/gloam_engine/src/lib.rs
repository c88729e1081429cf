//! Command dispatch for the gloam interactive-fiction engine.
//!
//! Maps each canonical verb from `gloam_parser` to a [`CommandHandler`] and
//! executes it against the world and session state. Every handler follows
//! the same contract: validate the object phrase, resolve it against the
//! world, check the verb's flag preconditions, then mutate and narrate.
//! Validation always completes before the first mutation, so a refusal
//! never leaves partial state behind.
//!
//! # Modules
//!
//! - [`result`] - The per-command outcome type
//! - [`handler`] - The handler trait and shared resolution helpers
//! - [`dispatch`] - The verb → handler table
//! - [`handlers`] - One module per canonical verb
//! - [`narrate`] - Room description composition

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dispatch;
pub mod handler;
pub mod handlers;
pub mod narrate;
pub mod result;

pub use dispatch::Dispatcher;
pub use handler::CommandHandler;
pub use result::CommandResult;
