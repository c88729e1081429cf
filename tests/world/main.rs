//! Integration tests for the gloam_world crate.
//!
//! Tests for the registry and placement layer:
//! - Moving objects between holders
//! - Visibility and lighting
//! - Whole-world integrity checks

mod placement;
mod visibility;
