//! One-day tour planner.
//!
//! Builds a timed, budget-aware itinerary for a day in a city: filter the
//! city's attraction catalog by interests, lay the matches out with start
//! and end times, and pick a transport mode for each hop.

pub mod cache;
pub mod catalog;
pub mod domain;
pub mod planner;
pub mod weather;
