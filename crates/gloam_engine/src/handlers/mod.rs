//! One module per canonical verb.

pub mod close;
pub mod drop;
pub mod examine;
pub mod go;
pub mod inventory;
pub mod look;
pub mod open;
pub mod put;
pub mod take;
pub mod wait;
