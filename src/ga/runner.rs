//! Generational GA runner.
//!
//! Drives the evolutionary loop: seed a random population, score every
//! generation, track the best-ever schedule, breed the next population
//! through tournament selection, single-point crossover, and per-gene
//! mutation, decay the mutation rate on a fixed interval, and stop on
//! the generation cap or on diminishing average-fitness improvement.
//!
//! Each scored generation is treated as an immutable snapshot: the
//! next population is bred into a separate vector and swapped in at
//! the generation boundary, which is what makes the parallel scoring
//! pass safe without locks.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

use super::config::GaConfig;
use super::operators::{
    ScoredSchedule, mutate, random_schedule, single_point_crossover, tournament_select,
};
use crate::fitness::FitnessEvaluator;
use crate::models::{Catalog, Schedule};
use crate::validation::{ValidationError, validate_catalog};

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best schedule found across all generations.
    pub best_schedule: Schedule,
    /// Fitness of the best schedule.
    pub best_fitness: f64,
    /// Number of generations actually run.
    pub generations: usize,
    /// Whether the run stopped on the convergence check rather than
    /// the generation cap.
    pub converged: bool,
}

/// Why a run could not start.
#[derive(Debug, Clone, PartialEq)]
pub enum RunError {
    /// A GA parameter failed validation.
    InvalidConfig(String),
    /// The catalog failed integrity checks.
    InvalidCatalog(Vec<ValidationError>),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::InvalidConfig(msg) => write!(f, "invalid GA configuration: {msg}"),
            RunError::InvalidCatalog(errors) => {
                write!(f, "invalid catalog ({} errors)", errors.len())
            }
        }
    }
}

impl std::error::Error for RunError {}

/// Generational GA runner for timetabling.
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA against a catalog with the pairing rules included
    /// in the fitness total.
    ///
    /// Fails fast — before any generation runs — on an invalid
    /// configuration or catalog. A poor final fitness is not an error:
    /// negative scores and runs that never improve are valid outcomes.
    pub fn run(catalog: &Catalog, config: &GaConfig) -> Result<GaResult, RunError> {
        let evaluator = FitnessEvaluator::new(catalog);
        Self::run_with_evaluator(catalog, &evaluator, config)
    }

    /// Runs the GA with a caller-built evaluator (e.g. one with the
    /// pairing rules disabled).
    pub fn run_with_evaluator(
        catalog: &Catalog,
        evaluator: &FitnessEvaluator,
        config: &GaConfig,
    ) -> Result<GaResult, RunError> {
        config.validate().map_err(RunError::InvalidConfig)?;
        validate_catalog(catalog).map_err(RunError::InvalidCatalog)?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let mut population: Vec<Schedule> = (0..config.population_size)
            .map(|_| random_schedule(catalog, &mut rng))
            .collect();

        let mut best_schedule: Option<Schedule> = None;
        let mut best_fitness = f64::NEG_INFINITY;
        let mut prev_avg: Option<f64> = None;
        let mut mutation_rate = config.mutation_rate;
        let mut generations = 0;
        let mut converged = false;

        for generation in 0..config.max_generations {
            let scored = Self::score(evaluator, population, config.parallel);
            generations = generation + 1;

            let mut generation_best = &scored[0];
            for candidate in &scored[1..] {
                if candidate.fitness > generation_best.fitness {
                    generation_best = candidate;
                }
            }
            // Strict improvement only
            if generation_best.fitness > best_fitness {
                best_fitness = generation_best.fitness;
                best_schedule = Some(generation_best.schedule.clone());
            }

            let avg = scored.iter().map(|s| s.fitness).sum::<f64>() / scored.len() as f64;
            tracing::debug!(
                generation,
                avg_fitness = avg,
                best_fitness,
                mutation_rate,
                "generation scored"
            );

            if generation >= config.min_generations_before_convergence {
                if let Some(improvement) = relative_improvement(prev_avg, avg) {
                    if improvement < config.convergence_threshold {
                        converged = true;
                        tracing::info!(generation, improvement, "average fitness converged");
                        break;
                    }
                }
            }
            prev_avg = Some(avg);

            let mut next = Vec::with_capacity(config.population_size);
            while next.len() < config.population_size {
                let parent_a = tournament_select(&scored, config.tournament_size, &mut rng);
                let parent_b = tournament_select(&scored, config.tournament_size, &mut rng);
                let child = single_point_crossover(parent_a, parent_b, &mut rng);
                next.push(mutate(&child, mutation_rate, catalog, &mut rng));
            }
            population = next;

            if generation % config.mutation_decay_interval == 0 {
                mutation_rate *= config.mutation_decay_factor;
                tracing::debug!(generation, mutation_rate, "mutation rate decayed");
            }
        }

        tracing::info!(generations, best_fitness, converged, "GA run finished");
        Ok(GaResult {
            best_schedule: best_schedule.expect("at least one generation was scored"),
            best_fitness,
            generations,
            converged,
        })
    }

    fn score(
        evaluator: &FitnessEvaluator,
        population: Vec<Schedule>,
        parallel: bool,
    ) -> Vec<ScoredSchedule> {
        let score_one = |schedule: Schedule| {
            let fitness = evaluator.evaluate(&schedule);
            ScoredSchedule { schedule, fitness }
        };
        if parallel {
            population.into_par_iter().map(score_one).collect()
        } else {
            population.into_iter().map(score_one).collect()
        }
    }
}

/// Relative average-fitness improvement between generations.
///
/// Returns `None` when there is no previous average or it is zero —
/// the convergence check is skipped for that generation rather than
/// dividing by zero.
fn relative_improvement(prev_avg: Option<f64>, avg: f64) -> Option<f64> {
    match prev_avg {
        Some(prev) if prev != 0.0 => Some((avg - prev) / prev.abs()),
        _ => None,
    }
}
