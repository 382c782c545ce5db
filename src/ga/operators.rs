//! Genetic operators for timetable schedules.
//!
//! All operators take an explicit random source, so runs are
//! reproducible under a seeded [`SmallRng`](rand::rngs::SmallRng).
//! None of them mutate their inputs; each returns a fresh schedule.
//!
//! Preconditions: the catalog has passed
//! [`validate_catalog`](crate::validation::validate_catalog) (non-empty
//! sections), and all schedules handed to one operator call share the
//! same catalog and therefore the same gene ordering.

use rand::Rng;
use rand::seq::index;

use crate::models::{Catalog, Gene, Schedule};

/// A schedule with its fitness, as scored within one generation.
#[derive(Debug, Clone)]
pub struct ScoredSchedule {
    /// The scored schedule.
    pub schedule: Schedule,
    /// Its fitness (higher is better).
    pub fitness: f64,
}

/// Draws a uniformly random schedule from the catalog domain.
///
/// Each activity independently gets a uniformly random room, time
/// slot, and facilitator.
pub fn random_schedule<R: Rng>(catalog: &Catalog, rng: &mut R) -> Schedule {
    let genes = catalog
        .activities()
        .iter()
        .map(|_| Gene {
            room: rng.random_range(0..catalog.rooms().len()),
            slot: rng.random_range(0..catalog.time_slots().len()),
            facilitator: rng.random_range(0..catalog.facilitators().len()),
        })
        .collect();
    Schedule::new(genes)
}

/// Tournament selection over a scored generation.
///
/// Samples `size` schedules without replacement and returns the one
/// with the highest fitness. Ties go to the first-sampled member.
/// When the population is smaller than `size`, the whole population
/// is sampled instead of failing.
///
/// # Panics
/// Panics if `scored` is empty.
pub fn tournament_select<'a, R: Rng>(
    scored: &'a [ScoredSchedule],
    size: usize,
    rng: &mut R,
) -> &'a Schedule {
    let entrants = size.min(scored.len());
    let mut best: Option<&ScoredSchedule> = None;
    for i in index::sample(rng, scored.len(), entrants) {
        let candidate = &scored[i];
        if best.map_or(true, |b| candidate.fitness > b.fitness) {
            best = Some(candidate);
        }
    }
    &best.expect("tournament over a non-empty population").schedule
}

/// Single-point crossover.
///
/// Chooses a cut locus uniformly in `[1, gene_count - 1]` and returns
/// parent A's genes before the locus followed by parent B's genes from
/// the locus on. With fewer than two genes there is no interior locus
/// and the child is a clone of parent A.
pub fn single_point_crossover<R: Rng>(a: &Schedule, b: &Schedule, rng: &mut R) -> Schedule {
    debug_assert_eq!(a.len(), b.len());
    if a.len() < 2 {
        return a.clone();
    }
    let locus = rng.random_range(1..a.len());
    let mut genes = Vec::with_capacity(a.len());
    genes.extend_from_slice(&a.genes[..locus]);
    genes.extend_from_slice(&b.genes[locus..]);
    Schedule::new(genes)
}

/// Per-gene field mutation.
///
/// Each gene independently mutates with probability `rate`; a mutated
/// gene has exactly one of its three fields (room, slot, facilitator)
/// resampled uniformly from the catalog domain. At most one field
/// changes per gene; a rate of zero returns an identical schedule.
pub fn mutate<R: Rng>(schedule: &Schedule, rate: f64, catalog: &Catalog, rng: &mut R) -> Schedule {
    let genes = schedule
        .genes
        .iter()
        .map(|gene| {
            if rng.random::<f64>() >= rate {
                return *gene;
            }
            let mut mutated = *gene;
            match rng.random_range(0..3) {
                0 => mutated.room = rng.random_range(0..catalog.rooms().len()),
                1 => mutated.slot = rng.random_range(0..catalog.time_slots().len()),
                _ => {
                    mutated.facilitator = rng.random_range(0..catalog.facilitators().len());
                }
            }
            mutated
        })
        .collect();
    Schedule::new(genes)
}
