//! World state for the gloam interactive-fiction engine.
//!
//! The [`World`] is the sole authority for room and object existence and
//! placement. All spatial queries and every relocation route through it;
//! nothing else touches the double-entry placement bookkeeping.
//!
//! Lighting is not computed here. Visibility queries consult the
//! [`Lighting`] collaborator and only consume its boolean answer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lighting;
pub mod world;

pub use lighting::{AlwaysLit, FlagLighting, Lighting};
pub use world::World;
