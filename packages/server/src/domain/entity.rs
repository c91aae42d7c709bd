//! Core domain models for the room finder.

use super::value_object::{RoomId, RoomName};

/// A stored room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Server-generated identifier
    pub id: RoomId,
    /// Caller-supplied business identifier (exposed as `roomId` on the wire)
    pub room_number: Option<i64>,
    /// Room name
    pub name: RoomName,
    /// Number of people the room holds
    pub capacity: Option<i32>,
}

impl Room {
    /// Create a room from a stored identifier and its attributes
    pub fn new(
        id: RoomId,
        room_number: Option<i64>,
        name: RoomName,
        capacity: Option<i32>,
    ) -> Self {
        Self {
            id,
            room_number,
            name,
            capacity,
        }
    }

    /// Replace every attribute with the draft's, keeping the identifier
    pub fn apply(&mut self, draft: RoomDraft) {
        self.room_number = draft.room_number;
        self.name = draft.name;
        self.capacity = draft.capacity;
    }
}

/// Validated room attributes waiting to be saved.
///
/// A draft without an `id` is inserted as a new room; a draft with one
/// replaces the attributes of the stored room with that id, or is inserted
/// under a new id when no such room is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDraft {
    pub id: Option<RoomId>,
    pub room_number: Option<i64>,
    pub name: RoomName,
    pub capacity: Option<i32>,
}

impl RoomDraft {
    /// Create a draft for a room that has not been stored yet
    pub fn new(room_number: Option<i64>, name: RoomName, capacity: Option<i32>) -> Self {
        Self {
            id: None,
            room_number,
            name,
            capacity,
        }
    }

    /// Target an existing room
    pub fn with_id(mut self, id: RoomId) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether saving this draft inserts a new room
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Turn the draft into a stored room under the given identifier
    pub fn into_room(self, id: RoomId) -> Room {
        Room::new(id, self.room_number, self.name, self.capacity)
    }
}
