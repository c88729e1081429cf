//! Integration tests for the gloam_model crate.
//!
//! Tests for the core data model:
//! - Flag sets on objects and rooms
//! - Object naming and capacity rules
//! - Rooms, directions, and exits

mod flags;
mod objects;
mod rooms;
