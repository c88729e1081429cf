//! REPL, CLI, and save files for gloam.
//!
//! This crate provides:
//! - [`Session`] - One playthrough: world, state, parser, dispatcher
//! - [`GameRepl`] - Interactive read-parse-dispatch loop
//! - [`demo_world`] - A small built-in game for trying the engine
//! - Save/restore via `MessagePack` snapshots

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod demo;
pub mod editor;
pub mod repl;
pub mod session;
pub mod snapshot;

pub use demo::demo_world;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::GameRepl;
pub use session::Session;
pub use snapshot::Snapshot;
