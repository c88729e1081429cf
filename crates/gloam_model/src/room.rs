//! Rooms, exits, and compass directions.

use std::collections::HashMap;
use std::fmt;

use crate::flags::{RoomFlag, RoomFlags};
use crate::id::{ObjectId, RoomId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A compass or movement direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Northeast.
    Northeast,
    /// Northwest.
    Northwest,
    /// Southeast.
    Southeast,
    /// Southwest.
    Southwest,
    /// Up.
    Up,
    /// Down.
    Down,
    /// Inward (enter).
    In,
    /// Outward (exit).
    Out,
}

impl Direction {
    /// Resolves a direction word or abbreviation, case-insensitively.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "north" | "n" => Some(Self::North),
            "south" | "s" => Some(Self::South),
            "east" | "e" => Some(Self::East),
            "west" | "w" => Some(Self::West),
            "northeast" | "ne" => Some(Self::Northeast),
            "northwest" | "nw" => Some(Self::Northwest),
            "southeast" | "se" => Some(Self::Southeast),
            "southwest" | "sw" => Some(Self::Southwest),
            "up" | "u" => Some(Self::Up),
            "down" | "d" => Some(Self::Down),
            "in" | "enter" | "inside" => Some(Self::In),
            "out" | "exit" | "outside" => Some(Self::Out),
            _ => None,
        }
    }

    /// The canonical direction word.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
            Self::Up => "up",
            Self::Down => "down",
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One edge of the room graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Exit {
    /// Leads to another room.
    To(RoomId),
    /// Permanently blocked; the message is shown instead of moving.
    Blocked(String),
}

/// A location node in the world graph.
///
/// Rooms are created at world-build time and never destroyed; only their
/// `items` list changes as objects move.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    /// Stable identifier.
    pub id: RoomId,
    /// Display name, e.g. `"West of House"`.
    pub name: String,
    /// Short description, shown on revisits.
    pub description: String,
    /// Long description, shown on first visit.
    pub long_description: String,
    /// Room capability bits.
    pub flags: RoomFlags,
    /// Exits by direction.
    pub exits: HashMap<Direction, Exit>,
    /// Objects physically present, in declaration order.
    pub items: Vec<ObjectId>,
    /// Objects visible from this room without being in it (shared scenery).
    pub global_items: Vec<ObjectId>,
}

impl Room {
    /// Creates a room. The long description defaults to the short one.
    #[must_use]
    pub fn new(id: impl Into<RoomId>, name: impl Into<String>, description: impl Into<String>) -> Self {
        let description = description.into();
        Self {
            id: id.into(),
            name: name.into(),
            long_description: description.clone(),
            description,
            flags: RoomFlags::empty(),
            exits: HashMap::new(),
            items: Vec::new(),
            global_items: Vec::new(),
        }
    }

    /// Sets the first-visit description.
    #[must_use]
    pub fn with_long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = text.into();
        self
    }

    /// Sets a flag.
    #[must_use]
    pub fn with_flag(mut self, flag: RoomFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Adds an exit to another room.
    #[must_use]
    pub fn with_exit(mut self, direction: Direction, to: impl Into<RoomId>) -> Self {
        self.exits.insert(direction, Exit::To(to.into()));
        self
    }

    /// Adds a blocked exit with a custom refusal message.
    #[must_use]
    pub fn with_blocked_exit(mut self, direction: Direction, message: impl Into<String>) -> Self {
        self.exits.insert(direction, Exit::Blocked(message.into()));
        self
    }

    /// Adds a shared-scenery object visible from this room.
    #[must_use]
    pub fn with_global_item(mut self, id: impl Into<ObjectId>) -> Self {
        self.global_items.push(id.into());
        self
    }

    /// True if `flag` is set.
    #[must_use]
    pub fn has_flag(&self, flag: RoomFlag) -> bool {
        self.flags.contains(flag)
    }

    /// The exit in `direction`, if any.
    #[must_use]
    pub fn exit(&self, direction: Direction) -> Option<&Exit> {
        self.exits.get(&direction)
    }
}
