//! Planning error types.
//!
//! These are the only recoverable, caller-facing errors the planner
//! produces. Everything else (no matching interests, a budget too small for
//! any paid transport) is a valid outcome represented in the normal result.

use super::time::TimeError;

/// Caller-facing errors from tour planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// No catalog data is available for the requested city.
    #[error("no catalog data available for city: {0}")]
    UnknownCity(String),

    /// The supplied start time is not a valid 24-hour clock time.
    #[error("invalid start time: {0}")]
    InvalidTime(#[from] TimeError),

    /// The supplied budget is negative (or not a number).
    #[error("invalid budget {0}: must be non-negative")]
    InvalidBudget(f64),
}
