//! GA-based timetable optimization.
//!
//! Implements the evolutionary search over [`Schedule`] candidates:
//! uniform random generation, tournament selection, single-point
//! crossover, per-gene field mutation, and the generational runner
//! with adaptive mutation-rate decay and convergence detection.
//!
//! # Submodules
//!
//! - [`operators`]: The genetic operators, each taking an explicit RNG
//!
//! # Reference
//!
//! - Eiben & Smith (2015), "Introduction to Evolutionary Computing", Ch. 3
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//!
//! [`Schedule`]: crate::models::Schedule

mod config;
pub mod operators;
mod runner;

pub use config::GaConfig;
pub use operators::{
    ScoredSchedule, mutate, random_schedule, single_point_crossover, tournament_select,
};
pub use runner::{GaResult, GaRunner, RunError};
