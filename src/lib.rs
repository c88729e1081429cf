//! Gloam - Turn-based interactive-fiction engine
//!
//! This crate re-exports all layers of the gloam system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: gloam_runtime — REPL, CLI, save files
//! Layer 3: gloam_engine  — Command dispatch, verb handlers, narration
//! Layer 2: gloam_parser  — Tokenizer, vocabulary, command parsing
//! Layer 1: gloam_world   — Object/room registry, placement, lighting
//! Layer 0: gloam_model   — Core types (ids, flags, objects, rooms, state)
//! ```

pub use gloam_engine as engine;
pub use gloam_model as model;
pub use gloam_parser as parser;
pub use gloam_runtime as runtime;
pub use gloam_world as world;
