//! Scheduled visit entries.

use chrono::Duration;

use super::{Category, ClockTime, PointOfInterest, TransportMode};

/// The transition from the previous stop to this one.
///
/// Present on every visit except the first. Distance comes from the
/// injected estimator; cost is distance times the chosen option's per-km
/// rate (zero for walking).
#[derive(Debug, Clone, PartialEq)]
pub struct Hop {
    /// Estimated distance from the previous stop, in kilometers.
    pub distance_km: f64,

    /// Cost of the hop at the chosen mode's per-km rate.
    pub cost: f64,
}

/// One scheduled stop on the itinerary.
///
/// Created by the itinerary builder with times stamped; the transport
/// optimizer later fills in `transport` for every stop and `hop` for every
/// stop except the first.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitEntry {
    /// Attraction name, copied from the catalog entry.
    pub name: String,

    /// Interest category, copied from the catalog entry.
    pub category: Category,

    /// Visit duration in minutes.
    pub duration_minutes: u32,

    /// Entry cost, copied from the catalog entry.
    pub cost: f64,

    /// When the visit starts.
    pub start: ClockTime,

    /// When the visit ends (start + duration).
    pub end: ClockTime,

    /// Transport mode used to reach this stop. `None` until the optimizer
    /// has run.
    pub transport: Option<TransportMode>,

    /// Hop from the previous stop. Always `None` for the first stop.
    pub hop: Option<Hop>,
}

impl VisitEntry {
    /// Create a visit scheduled at `start`, copying the catalog entry.
    ///
    /// The end time is `start + duration`. Transport fields are left unset
    /// for the optimizer.
    pub fn scheduled(poi: &PointOfInterest, start: ClockTime) -> Self {
        Self {
            name: poi.name().to_string(),
            category: poi.category().clone(),
            duration_minutes: poi.duration_minutes(),
            cost: poi.cost(),
            start,
            end: start + poi.duration(),
            transport: None,
            hop: None,
        }
    }

    /// Returns the visit duration.
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_minutes))
    }
}
