//! Point-of-interest catalog entries.

use chrono::Duration;

use super::Category;

/// Error returned when constructing an invalid point of interest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid point of interest: {reason}")]
pub struct InvalidPoi {
    reason: &'static str,
}

/// A point of interest in a city's catalog.
///
/// Immutable once constructed: the catalog owns these entries and the
/// planner only ever copies from them. Names are unique within a city.
///
/// # Examples
///
/// ```
/// use tour_server::domain::{Category, PointOfInterest};
///
/// let colosseum = PointOfInterest::new(
///     "Colosseum",
///     Category::parse("historical").unwrap(),
///     90,
///     15.0,
/// )
/// .unwrap();
///
/// assert_eq!(colosseum.name(), "Colosseum");
/// assert_eq!(colosseum.duration_minutes(), 90);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    name: String,
    category: Category,
    duration_minutes: u32,
    cost: f64,
}

impl PointOfInterest {
    /// Create a new point of interest.
    ///
    /// The visit duration must be positive and the entry cost non-negative
    /// and finite.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        duration_minutes: u32,
        cost: f64,
    ) -> Result<Self, InvalidPoi> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(InvalidPoi {
                reason: "name must not be empty",
            });
        }
        if duration_minutes == 0 {
            return Err(InvalidPoi {
                reason: "duration must be positive",
            });
        }
        if !(cost >= 0.0) || !cost.is_finite() {
            return Err(InvalidPoi {
                reason: "cost must be non-negative and finite",
            });
        }

        Ok(Self {
            name,
            category,
            duration_minutes,
            cost,
        })
    }

    /// Returns the attraction name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the interest category.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Returns the visit duration in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns the visit duration.
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Returns the entry cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}
