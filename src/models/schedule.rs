//! Schedule (candidate solution) model.
//!
//! A schedule assigns every catalog activity to a room, a time slot,
//! and a facilitator. Genes are stored in catalog activity order —
//! gene `i` always belongs to activity `i` — which is what keeps
//! crossover loci aligned across any two parents.

use serde::{Deserialize, Serialize};

use super::Catalog;

/// Assignment of one activity to a room, time slot, and facilitator.
///
/// All three fields are positions in the owning catalog's ordered
/// lists; the activity itself is implied by the gene's position in
/// its schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    /// Room position in catalog order.
    pub room: usize,
    /// Time-slot position in catalog order.
    pub slot: usize,
    /// Facilitator position in catalog order.
    pub facilitator: usize,
}

/// A complete candidate timetable: one gene per catalog activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Genes in catalog activity order.
    pub genes: Vec<Gene>,
}

/// A gene resolved against its catalog, for callers that want names
/// instead of positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Activity identifier.
    pub activity: String,
    /// Room identifier.
    pub room: String,
    /// Time-slot label.
    pub time_slot: String,
    /// Facilitator identifier.
    pub facilitator: String,
}

impl Schedule {
    /// Creates a schedule from genes in catalog activity order.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    /// Number of genes (equals the catalog activity count).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the schedule has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Whether the schedule covers every catalog activity with
    /// in-range room, slot, and facilitator positions.
    pub fn is_valid(&self, catalog: &Catalog) -> bool {
        self.genes.len() == catalog.activities().len()
            && self.genes.iter().all(|g| {
                g.room < catalog.rooms().len()
                    && g.slot < catalog.time_slots().len()
                    && g.facilitator < catalog.facilitators().len()
            })
    }

    /// Resolves every gene to named assignments, in catalog activity order.
    pub fn assignments(&self, catalog: &Catalog) -> Vec<Assignment> {
        self.genes
            .iter()
            .zip(catalog.activities())
            .map(|(gene, activity)| Assignment {
                activity: activity.id.clone(),
                room: catalog.rooms()[gene.room].id.clone(),
                time_slot: catalog.time_slots()[gene.slot].label.clone(),
                facilitator: catalog.facilitators()[gene.facilitator].id.clone(),
            })
            .collect()
    }

    /// Groups resolved assignments by time slot. The outer index is
    /// the slot's ordinal position; every catalog slot gets an entry,
    /// empty slots included.
    pub fn by_time_slot(&self, catalog: &Catalog) -> Vec<Vec<Assignment>> {
        let mut grouped: Vec<Vec<Assignment>> = vec![Vec::new(); catalog.time_slots().len()];
        for (gene, assignment) in self.genes.iter().zip(self.assignments(catalog)) {
            grouped[gene.slot].push(assignment);
        }
        grouped
    }
}
