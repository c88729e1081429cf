//! Per-session player state.
//!
//! One `GameState` (and one world) exists per session, explicitly
//! constructed and threaded through parse and dispatch. Nothing here is
//! global or shared.

use std::collections::{HashMap, HashSet};

use crate::id::{ObjectId, RoomId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The player's carried objects and weight ceiling.
///
/// The inventory stores ids only; object data (including sizes) lives in the
/// world registry, so the carried load is computed there. Additions are
/// weight-gated by [`Inventory::would_exceed`] before any placement change.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Inventory {
    /// Carried object ids, in pickup order.
    pub items: Vec<ObjectId>,
    /// Maximum total size the player can carry.
    pub max_weight: u32,
}

impl Inventory {
    /// Creates an empty inventory with the given weight ceiling.
    #[must_use]
    pub fn new(max_weight: u32) -> Self {
        Self {
            items: Vec::new(),
            max_weight,
        }
    }

    /// True if adding `size` to `current_load` would break the ceiling.
    #[must_use]
    pub fn would_exceed(&self, current_load: u32, size: u32) -> bool {
        current_load + size > self.max_weight
    }

    /// True if the player carries `id`.
    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.items.contains(id)
    }

    /// True if nothing is carried.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Mutable session state outside the world registry.
///
/// Tracks where the player is, scoring and turn counters, first-visit
/// bookkeeping, and arbitrary named flags for puzzle and quest state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    /// The room the player is in.
    pub current_room: RoomId,
    /// Score accumulated this session.
    pub score: i32,
    /// Completed turns. Parse failures do not count.
    pub moves: u32,
    /// Rooms the player has already seen (gates the long description).
    pub visited: HashSet<RoomId>,
    /// Named puzzle/quest flags.
    flags: HashMap<String, bool>,
    /// Player is currently in darkness.
    pub in_darkness: bool,
    /// Victory marker, set by external game logic.
    pub won: bool,
    /// Death/defeat marker, set by external game logic.
    pub lost: bool,
}

impl GameState {
    /// Creates session state with the player in `start_room`.
    #[must_use]
    pub fn new(start_room: impl Into<RoomId>) -> Self {
        Self {
            current_room: start_room.into(),
            score: 0,
            moves: 0,
            visited: HashSet::new(),
            flags: HashMap::new(),
            in_darkness: false,
            won: false,
            lost: false,
        }
    }

    /// Counts a completed turn.
    pub fn advance_turn(&mut self) {
        self.moves += 1;
    }

    /// Marks the current room visited. Returns true on the first visit.
    pub fn mark_visited(&mut self) -> bool {
        self.visited.insert(self.current_room.clone())
    }

    /// True if the player has already seen `room`.
    #[must_use]
    pub fn has_visited(&self, room: &RoomId) -> bool {
        self.visited.contains(room)
    }

    /// Sets a named flag.
    pub fn set_flag(&mut self, name: impl Into<String>, value: bool) {
        self.flags.insert(name.into(), value);
    }

    /// Reads a named flag; unset flags are false.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}
