//! End-to-end tests across all gloam crates.
//!
//! Drives whole sessions through the runtime's `Session`, from raw input
//! lines to world mutations and narration:
//! - A complete demo-game playthrough
//! - Turn counting and parse-failure semantics
//! - Save and restore round trips

mod playthrough;
