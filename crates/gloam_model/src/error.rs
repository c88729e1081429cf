//! Error types for the gloam engine.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! These are engine-integrity and I/O errors only. Player-facing refusals
//! ("you can't open that") are never `Error`s; they travel as command
//! results, and parse failures have their own type in `gloam_parser`.

use thiserror::Error;

use crate::id::{ObjectId, RoomId};

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for gloam operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A room id was registered twice.
    #[error("duplicate room id: {0}")]
    DuplicateRoom(RoomId),

    /// An object id was registered twice.
    #[error("duplicate object id: {0}")]
    DuplicateObject(ObjectId),

    /// A reference names a room the registry does not know.
    #[error("unknown room id: {0}")]
    UnknownRoom(RoomId),

    /// A reference names an object the registry does not know.
    #[error("unknown object id: {0}")]
    UnknownObject(ObjectId),

    /// World-build integrity violation: the two sides of a placement
    /// disagree, or a capacity invariant is broken.
    #[error("broken placement for {object}: {detail}")]
    BrokenPlacement {
        /// The object whose placement is inconsistent.
        object: ObjectId,
        /// What exactly disagrees.
        detail: String,
    },

    /// File or terminal I/O failure.
    #[error("io error: {0}")]
    Io(String),

    /// Snapshot encode/decode failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
