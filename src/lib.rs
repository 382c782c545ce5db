//! Course timetabling framework.
//!
//! Assigns a fixed set of academic activities to rooms, time slots, and
//! facilitators so as to maximize a soft-constraint quality score, using
//! a generational genetic algorithm. All constraints are soft — a
//! conflicted or infeasible-looking timetable scores low but is never
//! rejected.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Activity`, `Room`, `TimeSlot`,
//!   `Facilitator`, `Catalog`, `Gene`, `Schedule`
//! - **`validation`**: Input integrity checks (empty catalog, duplicate IDs,
//!   dangling facilitator/activity references)
//! - **`fitness`**: Soft-constraint rule evaluation with a per-rule breakdown
//! - **`ga`**: Genetic operators, configuration, and the generational runner
//!
//! # Example
//!
//! ```
//! use u_timetable::ga::{GaConfig, GaRunner};
//! use u_timetable::models::Catalog;
//!
//! let catalog = Catalog::sla_reference();
//! let config = GaConfig::default()
//!     .with_population_size(50)
//!     .with_max_generations(20)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(&catalog, &config).unwrap();
//! assert!(result.best_fitness.is_finite());
//! ```
//!
//! # References
//!
//! - Eiben & Smith (2015), "Introduction to Evolutionary Computing"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

pub mod fitness;
pub mod ga;
pub mod models;
pub mod validation;
