//! The world registry: rooms, objects, and the player inventory.

use std::collections::HashMap;

use gloam_model::{
    Error, GameObject, Inventory, Location, ObjectFlag, ObjectId, Result, Room, RoomId,
};

use crate::lighting::Lighting;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Authoritative store of rooms, objects, and the player inventory.
///
/// Owns every [`Room`] and [`GameObject`] instance, keyed by id. All other
/// components hold ids and resolve them here. Placement is double-entry
/// (object `location` + holder list) and [`World::move_object`] is the only
/// operation that changes it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct World {
    rooms: HashMap<RoomId, Room>,
    objects: HashMap<ObjectId, GameObject>,
    inventory: Inventory,
}

impl World {
    /// Creates an empty world with the given carry-weight ceiling.
    #[must_use]
    pub fn new(max_carry: u32) -> Self {
        Self {
            rooms: HashMap::new(),
            objects: HashMap::new(),
            inventory: Inventory::new(max_carry),
        }
    }

    /// Registers a room.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRoom`] if the id is already registered;
    /// existing rooms are never overwritten.
    pub fn add_room(&mut self, room: Room) -> Result<()> {
        if self.rooms.contains_key(&room.id) {
            return Err(Error::DuplicateRoom(room.id));
        }
        self.rooms.insert(room.id.clone(), room);
        Ok(())
    }

    /// Registers an object as declared by the world builder.
    ///
    /// Registration does not wire placement lists; place objects with
    /// [`World::move_object`] and run [`World::validate`] before the first
    /// turn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateObject`] if the id is already registered;
    /// existing objects are never overwritten.
    pub fn add_object(&mut self, object: GameObject) -> Result<()> {
        if self.objects.contains_key(&object.id) {
            return Err(Error::DuplicateObject(object.id));
        }
        self.objects.insert(object.id.clone(), object);
        Ok(())
    }

    /// Looks up a room. Absence is a normal outcome, not an error.
    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Mutable room lookup.
    pub fn room_mut(&mut self, id: &RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Looks up an object. Absence is a normal outcome, not an error.
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&GameObject> {
        self.objects.get(id)
    }

    /// Mutable object lookup.
    pub fn object_mut(&mut self, id: &ObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(id)
    }

    /// The player inventory.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Total size of everything the player carries.
    #[must_use]
    pub fn carried_load(&self) -> u32 {
        self.inventory
            .items
            .iter()
            .filter_map(|id| self.objects.get(id))
            .map(|o| o.size)
            .sum()
    }

    /// Total size of a container's contents.
    #[must_use]
    pub fn contents_load(&self, container: &ObjectId) -> u32 {
        self.objects
            .get(container)
            .map(|c| {
                c.contents
                    .iter()
                    .filter_map(|id| self.objects.get(id))
                    .map(|o| o.size)
                    .sum()
            })
            .unwrap_or(0)
    }

    /// True if `container` is an open container with room for `object`.
    #[must_use]
    pub fn can_contain(&self, container: &ObjectId, object: &ObjectId) -> bool {
        let (Some(holder), Some(candidate)) =
            (self.objects.get(container), self.objects.get(object))
        else {
            return false;
        };
        holder.can_accept(candidate.size, self.contents_load(container))
    }

    /// Objects the player can currently see in `room`.
    ///
    /// Room items in declaration order, then shared scenery, filtered to the
    /// `Visible` flag. A dark room yields nothing. Computed fresh on every
    /// call; the underlying lists can change between calls.
    #[must_use]
    pub fn visible_in_room(&self, room: &RoomId, lighting: &dyn Lighting) -> Vec<&GameObject> {
        if !lighting.is_room_lit(self, room) {
            return Vec::new();
        }
        let Some(room) = self.rooms.get(room) else {
            return Vec::new();
        };
        room.items
            .iter()
            .chain(room.global_items.iter())
            .filter_map(|id| self.objects.get(id))
            .filter(|o| o.has_flag(ObjectFlag::Visible))
            .collect()
    }

    /// Finds the first visible object in `room` matching `token`.
    ///
    /// Searches the room's own objects first, then the contents of any open
    /// container standing in the room. Tie-break when several objects match:
    /// first match in declaration order (room items before shared scenery
    /// before container contents). No scoring.
    #[must_use]
    pub fn find_in_room(
        &self,
        room: &RoomId,
        token: &str,
        lighting: &dyn Lighting,
    ) -> Option<&GameObject> {
        let in_room = self.visible_in_room(room, lighting);
        if let Some(found) = in_room.iter().find(|o| o.matches_name(token)) {
            return Some(found);
        }
        in_room
            .iter()
            .filter(|o| o.has_flag(ObjectFlag::Container) && o.has_flag(ObjectFlag::Open))
            .flat_map(|c| c.contents.iter())
            .filter_map(|id| self.objects.get(id))
            .filter(|o| o.has_flag(ObjectFlag::Visible))
            .find(|o| o.matches_name(token))
    }

    /// Finds the first carried object matching `token`.
    #[must_use]
    pub fn find_in_inventory(&self, token: &str) -> Option<&GameObject> {
        self.inventory
            .items
            .iter()
            .filter_map(|id| self.objects.get(id))
            .find(|o| o.matches_name(token))
    }

    /// Relocates an object. The only sanctioned placement change.
    ///
    /// Detaches the object from its current holder's list, sets its
    /// location, and appends it to the destination's list. Returns `false`
    /// with no mutation at all when the object or a destination id is
    /// unknown — that signals a world-build integrity bug, which the caller
    /// should log rather than show to the player.
    #[must_use = "a false return means the world was not mutated"]
    pub fn move_object(&mut self, id: &ObjectId, destination: Location) -> bool {
        let Some(object) = self.objects.get(id) else {
            return false;
        };
        let source = object.location.clone();

        // Validate the destination fully before touching anything.
        let destination_ok = match &destination {
            Location::Room(room) => self.rooms.contains_key(room),
            Location::Container(container) => {
                container != id && self.objects.contains_key(container)
            }
            Location::Player | Location::Nowhere => true,
        };
        if !destination_ok {
            return false;
        }

        // Detach from the current holder.
        match &source {
            Location::Room(room) => {
                if let Some(room) = self.rooms.get_mut(room) {
                    room.items.retain(|item| item != id);
                }
            }
            Location::Container(container) => {
                if let Some(container) = self.objects.get_mut(container) {
                    container.contents.retain(|item| item != id);
                }
            }
            Location::Player => self.inventory.items.retain(|item| item != id),
            Location::Nowhere => {}
        }

        // Attach to the destination.
        match &destination {
            Location::Room(room) => {
                if let Some(room) = self.rooms.get_mut(room) {
                    room.items.push(id.clone());
                }
            }
            Location::Container(container) => {
                if let Some(container) = self.objects.get_mut(container) {
                    container.contents.push(id.clone());
                }
            }
            Location::Player => self.inventory.items.push(id.clone()),
            Location::Nowhere => {}
        }

        if let Some(object) = self.objects.get_mut(id) {
            object.location = destination;
        }
        true
    }

    /// World-build integrity gate. Run after population, before the first
    /// turn.
    ///
    /// Checks that every cross-reference resolves and that both sides of
    /// every placement agree: object locations against holder lists, room
    /// items and container contents against object locations, exit
    /// destinations, shared-scenery ids, container capacity sums, and the
    /// inventory weight ceiling.
    ///
    /// # Errors
    ///
    /// Returns the first violation found as an [`Error`].
    pub fn validate(&self) -> Result<()> {
        for object in self.objects.values() {
            match &object.location {
                Location::Room(room_id) => {
                    let room = self
                        .rooms
                        .get(room_id)
                        .ok_or_else(|| Error::UnknownRoom(room_id.clone()))?;
                    if !room.items.contains(&object.id) {
                        return Err(Error::BrokenPlacement {
                            object: object.id.clone(),
                            detail: format!("located in {room_id} but absent from its items"),
                        });
                    }
                }
                Location::Container(container_id) => {
                    let container = self
                        .objects
                        .get(container_id)
                        .ok_or_else(|| Error::UnknownObject(container_id.clone()))?;
                    if !container.contents.contains(&object.id) {
                        return Err(Error::BrokenPlacement {
                            object: object.id.clone(),
                            detail: format!("located in {container_id} but absent from its contents"),
                        });
                    }
                }
                Location::Player => {
                    if !self.inventory.contains(&object.id) {
                        return Err(Error::BrokenPlacement {
                            object: object.id.clone(),
                            detail: "located on the player but absent from the inventory"
                                .to_string(),
                        });
                    }
                }
                Location::Nowhere => {}
            }

            for child_id in &object.contents {
                let child = self
                    .objects
                    .get(child_id)
                    .ok_or_else(|| Error::UnknownObject(child_id.clone()))?;
                if child.location != Location::Container(object.id.clone()) {
                    return Err(Error::BrokenPlacement {
                        object: child_id.clone(),
                        detail: format!("listed in {} but located elsewhere", object.id),
                    });
                }
            }

            if object.has_flag(ObjectFlag::Container)
                && self.contents_load(&object.id) > object.capacity
            {
                return Err(Error::BrokenPlacement {
                    object: object.id.clone(),
                    detail: "contents exceed capacity".to_string(),
                });
            }
        }

        for room in self.rooms.values() {
            for item_id in room.items.iter().chain(room.global_items.iter()) {
                if !self.objects.contains_key(item_id) {
                    return Err(Error::UnknownObject(item_id.clone()));
                }
            }
            for item_id in &room.items {
                if self.objects.get(item_id).map(|o| &o.location)
                    != Some(&Location::Room(room.id.clone()))
                {
                    return Err(Error::BrokenPlacement {
                        object: item_id.clone(),
                        detail: format!("listed in {} but located elsewhere", room.id),
                    });
                }
            }
            for exit in room.exits.values() {
                if let gloam_model::Exit::To(destination) = exit {
                    if !self.rooms.contains_key(destination) {
                        return Err(Error::UnknownRoom(destination.clone()));
                    }
                }
            }
        }

        for carried_id in &self.inventory.items {
            if !self.objects.contains_key(carried_id) {
                return Err(Error::UnknownObject(carried_id.clone()));
            }
        }
        if self.carried_load() > self.inventory.max_weight {
            return Err(Error::Internal(
                "inventory load exceeds the weight ceiling".to_string(),
            ));
        }

        Ok(())
    }
}
