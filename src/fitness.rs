//! Soft-constraint fitness evaluation.
//!
//! Scores a schedule as the sum of named rule contributions. Higher is
//! better; the range is unbounded on both sides. Every rule is soft —
//! a double-booked room or an overworked facilitator lowers the score
//! but never invalidates the schedule.
//!
//! # Rules
//!
//! Per gene:
//!
//! | Rule | Contribution |
//! |------|-------------|
//! | Room conflict | −0.5 when the (slot, room) pair hosts more than one activity |
//! | Capacity fit | −0.5 undersized; +0.3 within 3× enrollment; −0.2 beyond 3×, a further −0.4 beyond 6× |
//! | Facilitator preference | +0.5 preferred; +0.2 fallback; −0.1 otherwise |
//! | Simultaneous load | +0.2 sole activity of its facilitator in the slot; −0.2 when double-booked |
//! | Total load | −0.5 over 4 activities; −0.4 under 2 unless load-exempt |
//!
//! Per paired course group (when the catalog carries a [`PairingPolicy`]):
//!
//! | Rule | Contribution |
//! |------|-------------|
//! | Section spacing | +0.5 when a group's sections sit more than 4 slots apart; −0.5 in the same slot |
//! | Cross-section relations | per cross-group pair: +0.5 adjacent (−0.4 more when only one sits in a preferred building); +0.25 at distance 2; −0.25 in the same slot |
//!
//! Evaluation is pure and deterministic: identical gene sequences
//! always yield identical scores, so schedules can be scored in
//! parallel without coordination.
//!
//! [`PairingPolicy`]: crate::models::PairingPolicy

use crate::models::{Catalog, Gene, Schedule};

/// Per-rule fitness contributions for one schedule.
///
/// The audit counterpart of [`FitnessEvaluator::evaluate`]: the total
/// is always the sum of the named parts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FitnessBreakdown {
    /// Room conflict penalties.
    pub room_conflict: f64,
    /// Room capacity rewards and penalties.
    pub capacity_fit: f64,
    /// Facilitator preference rewards and penalties.
    pub facilitator_preference: f64,
    /// Per-slot facilitator load rewards and penalties.
    pub simultaneous_load: f64,
    /// Whole-schedule facilitator load penalties.
    pub total_load: f64,
    /// Within-group section spacing (pairing rule).
    pub section_spacing: f64,
    /// Cross-group relation terms (pairing rule).
    pub cross_section: f64,
}

impl FitnessBreakdown {
    /// Total fitness: the sum of all rule contributions.
    pub fn total(&self) -> f64 {
        self.room_conflict
            + self.capacity_fit
            + self.facilitator_preference
            + self.simultaneous_load
            + self.total_load
            + self.section_spacing
            + self.cross_section
    }
}

/// Scores schedules against the catalog's soft constraints.
///
/// Catalog-derived lookup tables are extracted once at construction so
/// the per-schedule scoring loop touches only flat arrays. The
/// evaluator is `Send + Sync` (owned data only) and safe to share
/// across a parallel scoring pass.
///
/// # Example
///
/// ```
/// use u_timetable::fitness::FitnessEvaluator;
/// use u_timetable::ga::random_schedule;
/// use u_timetable::models::Catalog;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let catalog = Catalog::sla_reference();
/// let evaluator = FitnessEvaluator::new(&catalog);
/// let mut rng = SmallRng::seed_from_u64(42);
/// let schedule = random_schedule(&catalog, &mut rng);
///
/// let breakdown = evaluator.evaluate_detailed(&schedule);
/// assert_eq!(evaluator.evaluate(&schedule), breakdown.total());
/// ```
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    tables: EvalTables,
    include_pairing: bool,
}

/// Flat lookup tables extracted from the catalog.
#[derive(Debug, Clone)]
struct EvalTables {
    /// Enrollment per activity, catalog order.
    enrollment: Vec<u32>,
    /// Capacity per room, catalog order.
    room_capacity: Vec<u32>,
    slot_count: usize,
    facilitator_count: usize,
    /// Activity-major membership matrix: `[activity * facilitator_count + facilitator]`.
    preferred: Vec<bool>,
    /// Same layout as `preferred`, for the fallback sets.
    fallback: Vec<bool>,
    /// Facilitator exempt from the minimum-load penalty.
    load_exempt: Option<usize>,
    pairing: Option<PairingTables>,
}

/// Pairing policy resolved to catalog positions.
#[derive(Debug, Clone)]
struct PairingTables {
    group_a: [usize; 2],
    group_b: [usize; 2],
    /// Per room: whether its building is in the preferred set.
    in_preferred_building: Vec<bool>,
}

impl FitnessEvaluator {
    /// Builds an evaluator for a catalog.
    ///
    /// A pairing policy whose section IDs do not all resolve is
    /// skipped here; [`validate_catalog`](crate::validation::validate_catalog)
    /// reports it.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            tables: EvalTables::from_catalog(catalog),
            include_pairing: true,
        }
    }

    /// Controls whether the pairing-rule contributions are merged into
    /// the total. On by default; `false` reproduces the behavior of
    /// scorers that compute the pairing terms but drop them.
    pub fn with_pairing_rules(mut self, include: bool) -> Self {
        self.include_pairing = include;
        self
    }

    /// Total fitness of a schedule.
    pub fn evaluate(&self, schedule: &Schedule) -> f64 {
        self.evaluate_detailed(schedule).total()
    }

    /// Per-rule fitness contributions of a schedule.
    ///
    /// When pairing rules are disabled the pairing fields stay zero,
    /// so the breakdown total always equals [`evaluate`](Self::evaluate).
    pub fn evaluate_detailed(&self, schedule: &Schedule) -> FitnessBreakdown {
        let t = &self.tables;
        debug_assert_eq!(schedule.len(), t.enrollment.len());

        let room_count = t.room_capacity.len();
        let mut room_occupancy = vec![0u32; t.slot_count * room_count];
        let mut facilitator_slot = vec![0u32; t.facilitator_count * t.slot_count];
        let mut facilitator_total = vec![0u32; t.facilitator_count];
        for gene in &schedule.genes {
            room_occupancy[gene.slot * room_count + gene.room] += 1;
            facilitator_slot[gene.facilitator * t.slot_count + gene.slot] += 1;
            facilitator_total[gene.facilitator] += 1;
        }

        let mut breakdown = FitnessBreakdown::default();
        for (activity, gene) in schedule.genes.iter().enumerate() {
            breakdown.room_conflict +=
                room_conflict_term(room_occupancy[gene.slot * room_count + gene.room]);
            breakdown.capacity_fit +=
                capacity_term(t.room_capacity[gene.room], t.enrollment[activity]);
            breakdown.facilitator_preference += preference_term(
                t.preferred[activity * t.facilitator_count + gene.facilitator],
                t.fallback[activity * t.facilitator_count + gene.facilitator],
            );
            breakdown.simultaneous_load += simultaneous_load_term(
                facilitator_slot[gene.facilitator * t.slot_count + gene.slot],
            );
            breakdown.total_load += total_load_term(
                facilitator_total[gene.facilitator],
                t.load_exempt == Some(gene.facilitator),
            );
        }

        if self.include_pairing {
            if let Some(pairing) = &t.pairing {
                breakdown.section_spacing = section_spacing_term(pairing.group_a, &schedule.genes)
                    + section_spacing_term(pairing.group_b, &schedule.genes);
                breakdown.cross_section = cross_section_term(pairing, &schedule.genes);
            }
        }

        breakdown
    }
}

impl EvalTables {
    fn from_catalog(catalog: &Catalog) -> Self {
        let facilitator_count = catalog.facilitators().len();
        let activity_count = catalog.activities().len();

        let mut preferred = vec![false; activity_count * facilitator_count];
        let mut fallback = vec![false; activity_count * facilitator_count];
        for (ai, activity) in catalog.activities().iter().enumerate() {
            for id in &activity.preferred_facilitators {
                if let Some(fi) = catalog.facilitator_index(id) {
                    preferred[ai * facilitator_count + fi] = true;
                }
            }
            for id in &activity.other_facilitators {
                if let Some(fi) = catalog.facilitator_index(id) {
                    fallback[ai * facilitator_count + fi] = true;
                }
            }
        }

        let pairing = catalog.pairing().and_then(|policy| {
            let resolve = |group: &[String; 2]| -> Option<[usize; 2]> {
                Some([
                    catalog.activity_index(&group[0])?,
                    catalog.activity_index(&group[1])?,
                ])
            };
            Some(PairingTables {
                group_a: resolve(&policy.group_a)?,
                group_b: resolve(&policy.group_b)?,
                in_preferred_building: catalog
                    .rooms()
                    .iter()
                    .map(|room| {
                        policy
                            .preferred_buildings
                            .iter()
                            .any(|b| b == room.building())
                    })
                    .collect(),
            })
        });

        Self {
            enrollment: catalog.activities().iter().map(|a| a.enrollment).collect(),
            room_capacity: catalog.rooms().iter().map(|r| r.capacity).collect(),
            slot_count: catalog.time_slots().len(),
            facilitator_count,
            preferred,
            fallback,
            load_exempt: catalog
                .load_exempt_facilitator()
                .and_then(|id| catalog.facilitator_index(id)),
            pairing,
        }
    }
}

// ======================== Named rule functions ========================

/// −0.5 when the gene shares its (slot, room) with another activity.
fn room_conflict_term(occupancy: u32) -> f64 {
    if occupancy > 1 {
        -0.5
    } else {
        0.0
    }
}

/// Room size relative to enrollment. The two oversize penalties compound.
fn capacity_term(capacity: u32, enrollment: u32) -> f64 {
    if capacity < enrollment {
        -0.5
    } else if capacity > 3 * enrollment {
        let mut term = -0.2;
        if capacity > 6 * enrollment {
            term -= 0.4;
        }
        term
    } else {
        0.3
    }
}

/// Facilitator membership in the activity's preference sets.
fn preference_term(preferred: bool, fallback: bool) -> f64 {
    if preferred {
        0.5
    } else if fallback {
        0.2
    } else {
        -0.1
    }
}

/// How many activities the gene's facilitator runs in its slot.
fn simultaneous_load_term(count: u32) -> f64 {
    if count > 1 {
        -0.2
    } else {
        0.2
    }
}

/// Whole-schedule activity count for the gene's facilitator.
fn total_load_term(total: u32, exempt: bool) -> f64 {
    if total > 4 {
        -0.5
    } else if total < 2 && !exempt {
        -0.4
    } else {
        0.0
    }
}

/// Slot spacing between a group's two sections.
fn section_spacing_term(group: [usize; 2], genes: &[Gene]) -> f64 {
    let distance = genes[group[0]].slot.abs_diff(genes[group[1]].slot);
    if distance > 4 {
        0.5
    } else if distance == 0 {
        -0.5
    } else {
        0.0
    }
}

/// Cross-group relation terms over every (group A, group B) section pair.
fn cross_section_term(pairing: &PairingTables, genes: &[Gene]) -> f64 {
    let mut term = 0.0;
    for &a in &pairing.group_a {
        for &b in &pairing.group_b {
            let (ga, gb) = (&genes[a], &genes[b]);
            match ga.slot.abs_diff(gb.slot) {
                1 => {
                    term += 0.5;
                    // Consecutive sessions should be in the same building zone
                    if pairing.in_preferred_building[ga.room]
                        != pairing.in_preferred_building[gb.room]
                    {
                        term -= 0.4;
                    }
                }
                2 => term += 0.25,
                0 => term -= 0.25,
                _ => {}
            }
        }
    }
    term
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::random_schedule;
    use crate::models::{Activity, PairingPolicy, Room};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn gene(room: usize, slot: usize, facilitator: usize) -> Gene {
        Gene {
            room,
            slot,
            facilitator,
        }
    }

    /// Two activities, one room, one slot, one preferred facilitator.
    fn conflict_catalog() -> Catalog {
        Catalog::new()
            .with_activity(Activity::new("A", 10).with_preferred(vec!["F".into()]))
            .with_activity(Activity::new("B", 10).with_preferred(vec!["F".into()]))
            .with_room(Room::new("R 1", 10))
            .with_time_slot("10 AM")
            .with_facilitator("F")
    }

    #[test]
    fn test_shared_room_and_slot_scenario() {
        let catalog = conflict_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);
        let schedule = Schedule::new(vec![gene(0, 0, 0), gene(0, 0, 0)]);

        let breakdown = evaluator.evaluate_detailed(&schedule);
        // Both genes collide in the one (slot, room) cell
        assert_eq!(breakdown.room_conflict, -1.0);
        // Capacity 10 for enrollment 10 is within 3x
        assert!((breakdown.capacity_fit - 0.6).abs() < 1e-10);
        // Preferred facilitator on both genes
        assert!((breakdown.facilitator_preference - 1.0).abs() < 1e-10);
        // The facilitator is double-booked in the slot
        assert!((breakdown.simultaneous_load - -0.4).abs() < 1e-10);
        // Two activities total: neither the overload nor the underload penalty
        assert_eq!(breakdown.total_load, 0.0);
        assert!((breakdown.total() - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_capacity_undersized() {
        assert_eq!(capacity_term(9, 10), -0.5);
    }

    #[test]
    fn test_capacity_snug() {
        assert!((capacity_term(10, 10) - 0.3).abs() < 1e-10);
        assert!((capacity_term(30, 10) - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_capacity_oversized() {
        assert!((capacity_term(31, 10) - -0.2).abs() < 1e-10);
        assert!((capacity_term(60, 10) - -0.2).abs() < 1e-10);
    }

    #[test]
    fn test_capacity_oversize_penalties_compound() {
        // Capacity 1000 for enrollment 10 crosses both the 3x and 6x bounds
        assert!((capacity_term(1000, 10) - -0.6).abs() < 1e-10);
        assert!((capacity_term(61, 10) - -0.6).abs() < 1e-10);
    }

    #[test]
    fn test_preference_tiers() {
        assert!((preference_term(true, false) - 0.5).abs() < 1e-10);
        assert!((preference_term(false, true) - 0.2).abs() < 1e-10);
        assert!((preference_term(false, false) - -0.1).abs() < 1e-10);
    }

    #[test]
    fn test_total_load_bounds() {
        assert_eq!(total_load_term(5, false), -0.5);
        assert_eq!(total_load_term(4, false), 0.0);
        assert_eq!(total_load_term(2, false), 0.0);
        assert!((total_load_term(1, false) - -0.4).abs() < 1e-10);
        assert_eq!(total_load_term(1, true), 0.0);
        // The overload penalty applies even to the exempt facilitator
        assert_eq!(total_load_term(5, true), -0.5);
    }

    /// Four paired sections, rooms in and out of the preferred building,
    /// six slots, enough facilitators to avoid load noise.
    fn pairing_catalog() -> Catalog {
        let mut catalog = Catalog::new()
            .with_activity(Activity::new("X1", 10))
            .with_activity(Activity::new("X2", 10))
            .with_activity(Activity::new("Y1", 10))
            .with_activity(Activity::new("Y2", 10))
            .with_room(Room::new("Roman 101", 20))
            .with_room(Room::new("Frank 119", 20))
            .with_pairing(
                PairingPolicy::new(["X1", "X2"], ["Y1", "Y2"])
                    .with_preferred_building("Roman"),
            );
        for label in ["10 AM", "11 AM", "12 PM", "1 PM", "2 PM", "3 PM"] {
            catalog = catalog.with_time_slot(label);
        }
        for f in ["F1", "F2", "F3", "F4"] {
            catalog = catalog.with_facilitator(f);
        }
        catalog
    }

    #[test]
    fn test_section_spacing_wide_and_identical() {
        let catalog = pairing_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);

        // X sections 5 slots apart, Y sections in the same slot
        let schedule = Schedule::new(vec![
            gene(0, 0, 0),
            gene(0, 5, 1),
            gene(1, 3, 2),
            gene(1, 3, 3),
        ]);
        let breakdown = evaluator.evaluate_detailed(&schedule);
        assert!((breakdown.section_spacing - 0.0).abs() < 1e-10); // +0.5 - 0.5
    }

    #[test]
    fn test_cross_section_adjacent_with_building_split() {
        let catalog = pairing_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);

        // X1 at slot 0 (Roman), Y1 at slot 1 (Frank): adjacent but split
        // across the building boundary. All other cross pairs at distance > 2.
        let schedule = Schedule::new(vec![
            gene(0, 0, 0),
            gene(0, 5, 1),
            gene(1, 1, 2),
            gene(0, 5, 3),
        ]);
        let breakdown = evaluator.evaluate_detailed(&schedule);
        // (X1,Y1): +0.5 - 0.4; (X2,Y2): distance 0 → -0.25; (X1,Y2): 5; (X2,Y1): 4
        assert!((breakdown.cross_section - (0.5 - 0.4 - 0.25)).abs() < 1e-10);
    }

    #[test]
    fn test_cross_section_adjacent_same_building() {
        let catalog = pairing_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);

        // X1 and Y1 adjacent, both in Roman: no co-location penalty
        let schedule = Schedule::new(vec![
            gene(0, 0, 0),
            gene(0, 4, 1),
            gene(0, 1, 2),
            gene(1, 4, 3),
        ]);
        let breakdown = evaluator.evaluate_detailed(&schedule);
        // (X1,Y1): +0.5; (X2,Y2): 0 → -0.25; (X1,Y2): 4; (X2,Y1): 3
        assert!((breakdown.cross_section - (0.5 - 0.25)).abs() < 1e-10);
    }

    #[test]
    fn test_cross_section_distance_two() {
        let catalog = pairing_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);

        let schedule = Schedule::new(vec![
            gene(0, 0, 0),
            gene(0, 5, 1),
            gene(1, 2, 2),
            gene(0, 5, 3),
        ]);
        let breakdown = evaluator.evaluate_detailed(&schedule);
        // (X1,Y1): 2 → +0.25; (X2,Y2): 0 → -0.25; (X1,Y2): 5; (X2,Y1): 3
        assert!((breakdown.cross_section - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_pairing_rules_can_be_disabled() {
        let catalog = pairing_catalog();
        let with_pairing = FitnessEvaluator::new(&catalog);
        let without_pairing = FitnessEvaluator::new(&catalog).with_pairing_rules(false);

        let schedule = Schedule::new(vec![
            gene(0, 0, 0),
            gene(0, 0, 1),
            gene(1, 1, 2),
            gene(0, 5, 3),
        ]);

        let full = with_pairing.evaluate_detailed(&schedule);
        let plain = without_pairing.evaluate_detailed(&schedule);
        assert_eq!(plain.section_spacing, 0.0);
        assert_eq!(plain.cross_section, 0.0);
        assert_eq!(plain.room_conflict, full.room_conflict);
        assert!(
            (full.total() - plain.total() - full.section_spacing - full.cross_section).abs()
                < 1e-10
        );
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let catalog = Catalog::sla_reference();
        let evaluator = FitnessEvaluator::new(&catalog);
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..10 {
            let schedule = random_schedule(&catalog, &mut rng);
            let first = evaluator.evaluate(&schedule);
            let second = evaluator.evaluate(&schedule);
            assert_eq!(first, second);
            assert_eq!(first, evaluator.evaluate(&schedule.clone()));
        }
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let catalog = Catalog::sla_reference();
        let evaluator = FitnessEvaluator::new(&catalog);
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..25 {
            let schedule = random_schedule(&catalog, &mut rng);
            let breakdown = evaluator.evaluate_detailed(&schedule);
            let sum = breakdown.room_conflict
                + breakdown.capacity_fit
                + breakdown.facilitator_preference
                + breakdown.simultaneous_load
                + breakdown.total_load
                + breakdown.section_spacing
                + breakdown.cross_section;
            assert!((evaluator.evaluate(&schedule) - sum).abs() < 1e-10);
        }
    }
}
