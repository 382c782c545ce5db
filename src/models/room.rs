//! Room model.
//!
//! Rooms are named by building and number (e.g. "Roman 216"); the
//! building prefix drives the cross-section co-location rule.

use serde::{Deserialize, Serialize};

/// A room that can host one activity per time slot.
///
/// Hosting more than one is allowed but penalized by the fitness rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier, "<building> <number>" (e.g. "Roman 216").
    pub id: String,
    /// Seating capacity.
    pub capacity: u32,
}

impl Room {
    /// Creates a new room.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            capacity,
        }
    }

    /// The building prefix of the room identifier (text before the
    /// first space, or the whole identifier if there is none).
    pub fn building(&self) -> &str {
        self.id.split_whitespace().next().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builder() {
        let r = Room::new("Roman 216", 30);
        assert_eq!(r.id, "Roman 216");
        assert_eq!(r.capacity, 30);
    }

    #[test]
    fn test_building_prefix() {
        assert_eq!(Room::new("Roman 216", 30).building(), "Roman");
        assert_eq!(Room::new("Beach 301", 75).building(), "Beach");
        assert_eq!(Room::new("Annex", 20).building(), "Annex");
    }
}
