//! Index mapping parts to their owning rooms
//!
//! Built as a side effect of part resolution and rebuilt from scratch on
//! every resolution call; it carries no state across calls. Downstream
//! interaction code uses it to treat a part as inseparable from its room
//! (dragging a part drags the room) without special-casing part ids.

use std::collections::HashMap;

/// Bidirectional part-to-room index.
#[derive(Debug, Clone, Default)]
pub struct PartRegistry {
    parent_by_part: HashMap<String, String>,
    parts_by_room: HashMap<String, Vec<String>>,
}

impl PartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `part_id` belongs to `room_id`.
    pub fn register(&mut self, part_id: impl Into<String>, room_id: impl Into<String>) {
        let part_id = part_id.into();
        let room_id = room_id.into();
        self.parts_by_room
            .entry(room_id.clone())
            .or_default()
            .push(part_id.clone());
        self.parent_by_part.insert(part_id, room_id);
    }

    /// True if `id` was registered as a part.
    pub fn is_part(&self, id: &str) -> bool {
        self.parent_by_part.contains_key(id)
    }

    /// The owning room of `id`, or `None` if `id` is not a part.
    pub fn parent_id(&self, id: &str) -> Option<&str> {
        self.parent_by_part.get(id).map(String::as_str)
    }

    /// The id to drag when `id` is grabbed: the owning room for a part,
    /// otherwise `id` itself.
    pub fn room_id_for_drag<'a>(&'a self, id: &'a str) -> &'a str {
        self.parent_id(id).unwrap_or(id)
    }

    /// True if `room_id` is the dragged entry or its parent is.
    pub fn is_room_or_parent_dragging(&self, room_id: &str, dragged_id: &str) -> bool {
        room_id == dragged_id || self.parent_id(room_id) == Some(dragged_id)
    }

    /// The parts registered for `room_id`, in registration order.
    pub fn parts_of(&self, room_id: &str) -> &[String] {
        self.parts_by_room
            .get(room_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
