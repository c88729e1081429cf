//! Core data model for the gloam interactive-fiction engine.
//!
//! This crate provides:
//! - [`RoomId`] / [`ObjectId`] - Stable identifiers into the world registries
//! - [`Location`] - Explicit placement of an object (room, container, player)
//! - [`ObjectFlags`] / [`RoomFlags`] - Capability and state bit sets
//! - [`GameObject`] / [`Room`] - The interactive entities of the world graph
//! - [`Inventory`] / [`GameState`] - Per-session player state
//! - [`Error`] - Error types for registry and serialization failures
//!
//! Everything here is pure data plus small predicates (flag tests, name
//! matching, capacity checks). Spatial queries and mutation live in
//! `gloam_world`; this crate has no knowledge of the registry.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod flags;
pub mod id;
pub mod object;
pub mod room;
pub mod state;

pub use error::{Error, Result};
pub use flags::{ObjectFlag, ObjectFlags, RoomFlag, RoomFlags};
pub use id::{Location, ObjectId, RoomId};
pub use object::GameObject;
pub use room::{Direction, Exit, Room};
pub use state::{GameState, Inventory};
