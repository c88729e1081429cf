//! Capability and state flags.
//!
//! Each entity kind carries a fixed enumeration of boolean capabilities over
//! a plain bit set. There is deliberately no type hierarchy per flag
//! combination: a locked openable container is just three bits.

use std::fmt;
use std::ops::BitOr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single capability or state bit on a [`crate::GameObject`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ObjectFlag {
    /// Can be picked up by the player.
    Takeable = 1 << 0,
    /// Appears in room listings and can be matched by name.
    Visible = 1 << 1,
    /// Can hold other objects.
    Container = 1 << 2,
    /// Can be opened and closed.
    Openable = 1 << 3,
    /// Currently open.
    Open = 1 << 4,
    /// Locked; refuses to open.
    Locked = 1 << 5,
    /// Emits light while in the room or carried.
    Light = 1 << 6,
    /// Usable as a weapon.
    Weapon = 1 << 7,
    /// Fixed scenery; part of the room description.
    Scenery = 1 << 8,
}

/// A set of [`ObjectFlag`]s.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectFlags(u16);

impl ObjectFlags {
    /// The empty flag set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns this set with `flag` added (builder form).
    #[must_use]
    pub const fn with(self, flag: ObjectFlag) -> Self {
        Self(self.0 | flag as u16)
    }

    /// True if `flag` is set.
    #[must_use]
    pub const fn contains(self, flag: ObjectFlag) -> bool {
        self.0 & flag as u16 != 0
    }

    /// Sets `flag`.
    pub fn insert(&mut self, flag: ObjectFlag) {
        self.0 |= flag as u16;
    }

    /// Clears `flag`.
    pub fn remove(&mut self, flag: ObjectFlag) {
        self.0 &= !(flag as u16);
    }
}

impl From<ObjectFlag> for ObjectFlags {
    fn from(flag: ObjectFlag) -> Self {
        Self::empty().with(flag)
    }
}

impl BitOr for ObjectFlag {
    type Output = ObjectFlags;

    fn bitor(self, rhs: Self) -> ObjectFlags {
        ObjectFlags::empty().with(self).with(rhs)
    }
}

impl BitOr<ObjectFlag> for ObjectFlags {
    type Output = ObjectFlags;

    fn bitor(self, rhs: ObjectFlag) -> ObjectFlags {
        self.with(rhs)
    }
}

impl fmt::Debug for ObjectFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const ALL: [ObjectFlag; 9] = [
            ObjectFlag::Takeable,
            ObjectFlag::Visible,
            ObjectFlag::Container,
            ObjectFlag::Openable,
            ObjectFlag::Open,
            ObjectFlag::Locked,
            ObjectFlag::Light,
            ObjectFlag::Weapon,
            ObjectFlag::Scenery,
        ];
        let mut set = f.debug_set();
        for flag in ALL {
            if self.contains(flag) {
                set.entry(&flag);
            }
        }
        set.finish()
    }
}

/// A single capability or state bit on a [`crate::Room`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoomFlag {
    /// Intrinsically lit; never needs a light source.
    Light = 1 << 0,
    /// Outdoors.
    Outside = 1 << 1,
}

/// A set of [`RoomFlag`]s.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoomFlags(u8);

impl RoomFlags {
    /// The empty flag set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns this set with `flag` added (builder form).
    #[must_use]
    pub const fn with(self, flag: RoomFlag) -> Self {
        Self(self.0 | flag as u8)
    }

    /// True if `flag` is set.
    #[must_use]
    pub const fn contains(self, flag: RoomFlag) -> bool {
        self.0 & flag as u8 != 0
    }

    /// Sets `flag`.
    pub fn insert(&mut self, flag: RoomFlag) {
        self.0 |= flag as u8;
    }

    /// Clears `flag`.
    pub fn remove(&mut self, flag: RoomFlag) {
        self.0 &= !(flag as u8);
    }
}

impl fmt::Debug for RoomFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for flag in [RoomFlag::Light, RoomFlag::Outside] {
            if self.contains(flag) {
                set.entry(&flag);
            }
        }
        set.finish()
    }
}
