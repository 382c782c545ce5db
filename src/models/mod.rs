//! Timetabling domain models.
//!
//! Provides the core data types for representing a timetabling problem
//! and its candidate solutions. The catalog side (`Activity`, `Room`,
//! `TimeSlot`, `Facilitator`, `Catalog`) is immutable reference data;
//! the solution side (`Gene`, `Schedule`) is what the GA evolves.

mod activity;
mod catalog;
mod facilitator;
mod room;
mod schedule;
mod time_slot;

pub use activity::Activity;
pub use catalog::{Catalog, PairingPolicy};
pub use facilitator::Facilitator;
pub use room::Room;
pub use schedule::{Assignment, Gene, Schedule};
pub use time_slot::TimeSlot;
