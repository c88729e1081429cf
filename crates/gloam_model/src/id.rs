//! Identifiers and placement.
//!
//! Rooms and objects are keyed by stable string identifiers assigned at
//! world-build time. Cross-references between entities are always ids
//! resolved through the owning registry, never direct aliases.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a room in the world graph.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoomId(String);

impl RoomId {
    /// Creates a room id from a stable key such as `"WEST-OF-HOUSE"`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoomId({})", self.0)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identifier of a game object.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectId(String);

impl ObjectId {
    /// Creates an object id from a stable key such as `"LAMP"`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Where a game object currently is.
///
/// An object is always in exactly one place. `Nowhere` is the "not placed"
/// state an object holds between registration and its first placement;
/// `Player` is the reserved pseudo-location for carried objects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Location {
    /// Physically present in a room.
    Room(RoomId),
    /// Inside a container object.
    Container(ObjectId),
    /// Carried by the player.
    Player,
    /// Registered but not yet placed anywhere.
    Nowhere,
}

impl Location {
    /// True if the object is carried by the player.
    #[must_use]
    pub fn is_player(&self) -> bool {
        matches!(self, Self::Player)
    }

    /// The room id, if the location is a room.
    #[must_use]
    pub fn room(&self) -> Option<&RoomId> {
        match self {
            Self::Room(id) => Some(id),
            _ => None,
        }
    }
}
