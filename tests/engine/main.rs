//! Integration tests for the gloam_engine crate.
//!
//! Tests for dispatch and the verb handlers against a small world:
//! - Verb preconditions and mutations
//! - Room narration

mod narration;
