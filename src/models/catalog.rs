//! Immutable domain catalog.
//!
//! The catalog holds the fixed reference data a timetabling run reads:
//! ordered activities, rooms, time slots, and facilitators, plus the
//! cross-section pairing policy and the load-exempt facilitator. It is
//! constructed once (in code or deserialized from JSON) and never
//! mutated afterwards; the generator, fitness evaluator, and GA runner
//! all take it by shared reference.
//!
//! Ordering matters: genes are stored in catalog activity order, and
//! slot distance is measured over the time-slot ordering.

use serde::{Deserialize, Serialize};

use super::{Activity, Facilitator, Room, TimeSlot};

/// Immutable reference data for a timetabling problem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    activities: Vec<Activity>,
    rooms: Vec<Room>,
    time_slots: Vec<TimeSlot>,
    facilitators: Vec<Facilitator>,
    pairing: Option<PairingPolicy>,
    load_exempt_facilitator: Option<String>,
}

/// Scheduling policy for two paired course groups.
///
/// Each group is exactly two like sections of one course. The
/// within-group spacing rule and the cross-group relation rules in
/// `fitness` are driven by this policy; a catalog without one simply
/// skips those rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingPolicy {
    /// Section activity IDs of the first group.
    pub group_a: [String; 2],
    /// Section activity IDs of the second group.
    pub group_b: [String; 2],
    /// Buildings where consecutive cross-group sessions should co-locate.
    pub preferred_buildings: Vec<String>,
}

impl PairingPolicy {
    /// Creates a pairing policy over two section groups.
    pub fn new(group_a: [&str; 2], group_b: [&str; 2]) -> Self {
        Self {
            group_a: [group_a[0].to_string(), group_a[1].to_string()],
            group_b: [group_b[0].to_string(), group_b[1].to_string()],
            preferred_buildings: Vec::new(),
        }
    }

    /// Adds a preferred building.
    pub fn with_preferred_building(mut self, building: impl Into<String>) -> Self {
        self.preferred_buildings.push(building.into());
        self
    }
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an activity.
    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activities.push(activity);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a time slot. The ordinal index is its insertion position.
    pub fn with_time_slot(mut self, label: impl Into<String>) -> Self {
        let index = self.time_slots.len();
        self.time_slots.push(TimeSlot::new(index, label));
        self
    }

    /// Adds a facilitator.
    pub fn with_facilitator(mut self, id: impl Into<String>) -> Self {
        self.facilitators.push(Facilitator::new(id));
        self
    }

    /// Sets the cross-section pairing policy.
    pub fn with_pairing(mut self, pairing: PairingPolicy) -> Self {
        self.pairing = Some(pairing);
        self
    }

    /// Exempts a facilitator from the minimum-load penalty.
    pub fn with_load_exempt(mut self, facilitator: impl Into<String>) -> Self {
        self.load_exempt_facilitator = Some(facilitator.into());
        self
    }

    /// Ordered activities.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Ordered rooms.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Ordered time slots.
    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    /// Ordered facilitators.
    pub fn facilitators(&self) -> &[Facilitator] {
        &self.facilitators
    }

    /// The cross-section pairing policy, if any.
    pub fn pairing(&self) -> Option<&PairingPolicy> {
        self.pairing.as_ref()
    }

    /// The facilitator exempt from the minimum-load penalty, if any.
    pub fn load_exempt_facilitator(&self) -> Option<&str> {
        self.load_exempt_facilitator.as_deref()
    }

    /// Position of an activity in catalog order.
    pub fn activity_index(&self, id: &str) -> Option<usize> {
        self.activities.iter().position(|a| a.id == id)
    }

    /// Position of a room in catalog order.
    pub fn room_index(&self, id: &str) -> Option<usize> {
        self.rooms.iter().position(|r| r.id == id)
    }

    /// Position of a facilitator in catalog order.
    pub fn facilitator_index(&self, id: &str) -> Option<usize> {
        self.facilitators.iter().position(|f| f.id == id)
    }

    /// Whether any of the four reference sections is empty.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
            || self.rooms.is_empty()
            || self.time_slots.is_empty()
            || self.facilitators.is_empty()
    }

    /// The SLA course reference dataset: 11 sections, 9 rooms across six
    /// buildings, 6 hourly slots, 10 facilitators, the SLA100/SLA191
    /// section pairing with Roman/Beach co-location, and Tyler exempt
    /// from the minimum-load penalty.
    pub fn sla_reference() -> Self {
        fn ids(v: &[&str]) -> Vec<String> {
            v.iter().map(|s| s.to_string()).collect()
        }

        let intro_preferred = ids(&["Glen", "Lock", "Banks", "Zeldin"]);
        let intro_other = ids(&["Numen", "Richards"]);

        Catalog::new()
            .with_activity(
                Activity::new("SLA100A", 50)
                    .with_preferred(intro_preferred.clone())
                    .with_other(intro_other.clone()),
            )
            .with_activity(
                Activity::new("SLA100B", 50)
                    .with_preferred(intro_preferred.clone())
                    .with_other(intro_other.clone()),
            )
            .with_activity(
                Activity::new("SLA191A", 50)
                    .with_preferred(intro_preferred.clone())
                    .with_other(intro_other.clone()),
            )
            .with_activity(
                Activity::new("SLA191B", 50)
                    .with_preferred(intro_preferred)
                    .with_other(intro_other),
            )
            .with_activity(
                Activity::new("SLA201", 50)
                    .with_preferred(ids(&["Glen", "Banks", "Zeldin", "Shaw"]))
                    .with_other(ids(&["Numen", "Richards", "Singer"])),
            )
            .with_activity(
                Activity::new("SLA291", 50)
                    .with_preferred(ids(&["Lock", "Banks", "Zeldin", "Singer"]))
                    .with_other(ids(&["Numen", "Richards", "Shaw", "Tyler"])),
            )
            .with_activity(
                Activity::new("SLA303", 60)
                    .with_preferred(ids(&["Glen", "Zeldin", "Banks"]))
                    .with_other(ids(&["Numen", "Singer", "Shaw"])),
            )
            .with_activity(
                Activity::new("SLA304", 25)
                    .with_preferred(ids(&["Glen", "Banks", "Tyler"]))
                    .with_other(ids(&[
                        "Numen", "Singer", "Shaw", "Richards", "Uther", "Zeldin",
                    ])),
            )
            .with_activity(
                Activity::new("SLA394", 20)
                    .with_preferred(ids(&["Tyler", "Singer"]))
                    .with_other(ids(&["Richards", "Zeldin"])),
            )
            .with_activity(
                Activity::new("SLA449", 60)
                    .with_preferred(ids(&["Tyler", "Singer", "Shaw"]))
                    .with_other(ids(&["Zeldin", "Uther"])),
            )
            .with_activity(
                Activity::new("SLA451", 100)
                    .with_preferred(ids(&["Tyler", "Singer", "Shaw"]))
                    .with_other(ids(&["Zeldin", "Uther", "Richards", "Banks"])),
            )
            .with_room(Room::new("Slater 003", 45))
            .with_room(Room::new("Roman 216", 30))
            .with_room(Room::new("Loft 206", 75))
            .with_room(Room::new("Roman 201", 50))
            .with_room(Room::new("Loft 310", 108))
            .with_room(Room::new("Beach 201", 60))
            .with_room(Room::new("Beach 301", 75))
            .with_room(Room::new("Logos 325", 450))
            .with_room(Room::new("Frank 119", 60))
            .with_time_slot("10 AM")
            .with_time_slot("11 AM")
            .with_time_slot("12 PM")
            .with_time_slot("1 PM")
            .with_time_slot("2 PM")
            .with_time_slot("3 PM")
            .with_facilitator("Lock")
            .with_facilitator("Glen")
            .with_facilitator("Banks")
            .with_facilitator("Richards")
            .with_facilitator("Shaw")
            .with_facilitator("Singer")
            .with_facilitator("Uther")
            .with_facilitator("Tyler")
            .with_facilitator("Numen")
            .with_facilitator("Zeldin")
            .with_pairing(
                PairingPolicy::new(["SLA100A", "SLA100B"], ["SLA191A", "SLA191B"])
                    .with_preferred_building("Roman")
                    .with_preferred_building("Beach"),
            )
            .with_load_exempt("Tyler")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_builder() {
        let catalog = Catalog::new()
            .with_activity(Activity::new("A", 10))
            .with_room(Room::new("R 1", 20))
            .with_time_slot("10 AM")
            .with_time_slot("11 AM")
            .with_facilitator("F");

        assert_eq!(catalog.activities().len(), 1);
        assert_eq!(catalog.rooms().len(), 1);
        assert_eq!(catalog.time_slots().len(), 2);
        assert_eq!(catalog.facilitators().len(), 1);
        assert!(!catalog.is_empty());
        assert!(catalog.pairing().is_none());
    }

    #[test]
    fn test_time_slot_indices_follow_insertion_order() {
        let catalog = Catalog::new()
            .with_time_slot("10 AM")
            .with_time_slot("11 AM")
            .with_time_slot("12 PM");

        for (i, slot) in catalog.time_slots().iter().enumerate() {
            assert_eq!(slot.index, i);
        }
    }

    #[test]
    fn test_index_lookups() {
        let catalog = Catalog::sla_reference();
        assert_eq!(catalog.activity_index("SLA100A"), Some(0));
        assert_eq!(catalog.activity_index("SLA451"), Some(10));
        assert_eq!(catalog.room_index("Roman 216"), Some(1));
        assert_eq!(catalog.facilitator_index("Tyler"), Some(7));
        assert_eq!(catalog.activity_index("SLA999"), None);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(Catalog::new().is_empty());
        // One missing section is enough
        let no_rooms = Catalog::new()
            .with_activity(Activity::new("A", 10))
            .with_time_slot("10 AM")
            .with_facilitator("F");
        assert!(no_rooms.is_empty());
    }

    #[test]
    fn test_sla_reference_shape() {
        let catalog = Catalog::sla_reference();
        assert_eq!(catalog.activities().len(), 11);
        assert_eq!(catalog.rooms().len(), 9);
        assert_eq!(catalog.time_slots().len(), 6);
        assert_eq!(catalog.facilitators().len(), 10);
        assert_eq!(catalog.load_exempt_facilitator(), Some("Tyler"));

        let pairing = catalog.pairing().unwrap();
        assert_eq!(pairing.group_a, ["SLA100A".to_string(), "SLA100B".to_string()]);
        assert_eq!(pairing.preferred_buildings, vec!["Roman", "Beach"]);
    }

    #[test]
    fn test_catalog_serde_round_trip() {
        let catalog = Catalog::sla_reference();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();

        assert_eq!(back.activities().len(), catalog.activities().len());
        assert_eq!(back.rooms().len(), catalog.rooms().len());
        assert_eq!(back.time_slots(), catalog.time_slots());
        assert_eq!(back.facilitators(), catalog.facilitators());
        assert_eq!(back.pairing(), catalog.pairing());
    }
}
