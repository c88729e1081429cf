//! Game objects: items, scenery, containers.

use crate::flags::{ObjectFlag, ObjectFlags};
use crate::id::{Location, ObjectId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Any interactive entity in the world: item, scenery, or container.
///
/// Objects are created once at world-build time and mutated in place for the
/// life of a session: flags toggle, placement changes. They are never
/// destroyed; an object leaves play by clearing its `Visible` flag.
///
/// Placement is double-entry bookkeeping: `location` names the holder, and
/// the holder's item/contents list names this object. `gloam_world` owns the
/// only relocation path that keeps both sides in agreement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameObject {
    /// Stable identifier.
    pub id: ObjectId,
    /// Display name, e.g. `"brass lantern"` uses name `"lantern"`.
    pub name: String,
    /// Text returned verbatim by the examine verb.
    pub description: String,
    /// Alternate nouns that match this object, stored lowercase.
    pub synonyms: Vec<String>,
    /// Qualifier words that may prefix the noun, stored lowercase.
    pub adjectives: Vec<String>,
    /// Capability and state bits.
    pub flags: ObjectFlags,
    /// Weight/bulk unit; counts against inventory and container capacity.
    pub size: u32,
    /// Maximum total size of contents. Meaningful only for containers.
    pub capacity: u32,
    /// Current placement.
    pub location: Location,
    /// Child object ids, in insertion order. Non-empty only for containers.
    pub contents: Vec<ObjectId>,
}

impl GameObject {
    /// Creates an object with the given id, name, and description.
    ///
    /// New objects start `Visible`, size 1, unplaced, with no contents.
    #[must_use]
    pub fn new(
        id: impl Into<ObjectId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            synonyms: Vec::new(),
            adjectives: Vec::new(),
            flags: ObjectFlags::empty().with(ObjectFlag::Visible),
            size: 1,
            capacity: 0,
            location: Location::Nowhere,
            contents: Vec::new(),
        }
    }

    /// Adds an alternate noun.
    #[must_use]
    pub fn with_synonym(mut self, synonym: impl Into<String>) -> Self {
        self.synonyms.push(synonym.into().to_lowercase());
        self
    }

    /// Adds a qualifier word.
    #[must_use]
    pub fn with_adjective(mut self, adjective: impl Into<String>) -> Self {
        self.adjectives.push(adjective.into().to_lowercase());
        self
    }

    /// Sets a flag.
    #[must_use]
    pub fn with_flag(mut self, flag: ObjectFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Sets the size.
    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Sets the container capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// True if `flag` is set.
    #[must_use]
    pub fn has_flag(&self, flag: ObjectFlag) -> bool {
        self.flags.contains(flag)
    }

    /// Sets `flag`.
    pub fn set_flag(&mut self, flag: ObjectFlag) {
        self.flags.insert(flag);
    }

    /// Clears `flag`.
    pub fn clear_flag(&mut self, flag: ObjectFlag) {
        self.flags.remove(flag);
    }

    /// Case-insensitive noun match.
    ///
    /// A token matches if it equals the name, any synonym, or the name or a
    /// synonym prefixed by one of this object's adjectives ("brass lantern"
    /// matches an object named "lantern" with adjective "brass" and synonym
    /// "lamp"). Description text never matches.
    #[must_use]
    pub fn matches_name(&self, token: &str) -> bool {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            return false;
        }

        let name = self.name.to_lowercase();
        if token == name || self.synonyms.iter().any(|s| *s == token) {
            return true;
        }

        self.adjectives.iter().any(|adj| {
            token
                .strip_prefix(adj.as_str())
                .and_then(|rest| rest.strip_prefix(' '))
                .is_some_and(|noun| noun == name || self.synonyms.iter().any(|s| s == noun))
        })
    }

    /// Capacity check for placing a candidate object inside this one.
    ///
    /// `current_load` is the total size of this container's contents; child
    /// sizes live in the world registry, so the caller supplies the sum.
    /// True only for an open container with room left; the boundary
    /// `current_load + candidate_size == capacity` is accepted.
    #[must_use]
    pub fn can_accept(&self, candidate_size: u32, current_load: u32) -> bool {
        self.has_flag(ObjectFlag::Container)
            && self.has_flag(ObjectFlag::Open)
            && current_load + candidate_size <= self.capacity
    }
}
