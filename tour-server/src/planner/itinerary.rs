//! Itinerary layout.
//!
//! Filters a city's catalog by the requested interest categories and lays
//! the matching attractions out as a same-day sequence of timed visits.
//! Visits keep catalog order; there is no reordering by distance, opening
//! hours, or time windows.

use std::collections::HashSet;

use chrono::Duration;
use tracing::debug;

use crate::domain::{Category, ClockTime, PointOfInterest, VisitEntry};

/// Fixed buffer between the end of one visit and the start of the next,
/// in minutes.
pub const STOP_BUFFER_MINUTES: i64 = 15;

/// Lay out a timed itinerary from a city catalog.
///
/// Retains each catalog entry whose category is in `interests`, in catalog
/// order, and stamps start/end times from a running clock: each visit starts
/// where the previous one ended plus the fixed 15-minute buffer. Categories
/// that match nothing are silently dropped; an empty result is a valid
/// itinerary, not an error.
///
/// Pure function: no side effects beyond the returned sequence.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use tour_server::domain::{Category, ClockTime, PointOfInterest};
/// use tour_server::planner::build_itinerary;
///
/// let catalog = vec![PointOfInterest::new(
///     "Colosseum",
///     Category::parse("historical").unwrap(),
///     90,
///     15.0,
/// )
/// .unwrap()];
/// let interests: HashSet<Category> = [Category::parse("historical").unwrap()].into();
///
/// let visits = build_itinerary(&catalog, &interests, ClockTime::parse_hhmm("09:00").unwrap());
/// assert_eq!(visits.len(), 1);
/// assert_eq!(visits[0].start.to_string(), "09:00");
/// assert_eq!(visits[0].end.to_string(), "10:30");
/// ```
pub fn build_itinerary(
    catalog: &[PointOfInterest],
    interests: &HashSet<Category>,
    start: ClockTime,
) -> Vec<VisitEntry> {
    let mut visits = Vec::new();
    let mut clock = start;

    for poi in catalog.iter().filter(|p| interests.contains(p.category())) {
        let visit = VisitEntry::scheduled(poi, clock);
        clock = visit.end + Duration::minutes(STOP_BUFFER_MINUTES);
        visits.push(visit);
    }

    debug!(stops = visits.len(), start = %start, "laid out itinerary");
    visits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi(name: &str, cat: &str, mins: u32, cost: f64) -> PointOfInterest {
        PointOfInterest::new(name, Category::parse(cat).unwrap(), mins, cost).unwrap()
    }

    fn interests(tags: &[&str]) -> HashSet<Category> {
        tags.iter().map(|t| Category::parse(t).unwrap()).collect()
    }

    fn start(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    #[test]
    fn lays_out_matching_attractions_in_order() {
        let catalog = vec![
            poi("Colosseum", "historical", 90, 15.0),
            poi("Trevi Fountain", "relaxing", 30, 0.0),
        ];

        let visits = build_itinerary(&catalog, &interests(&["historical", "relaxing"]), start("09:00"));

        assert_eq!(visits.len(), 2);
        assert_eq!(visits[0].name, "Colosseum");
        assert_eq!(visits[0].start.to_string(), "09:00");
        assert_eq!(visits[0].end.to_string(), "10:30");
        assert_eq!(visits[1].name, "Trevi Fountain");
        assert_eq!(visits[1].start.to_string(), "10:45");
        assert_eq!(visits[1].end.to_string(), "11:15");
    }

    #[test]
    fn filters_by_interest() {
        let catalog = vec![
            poi("Colosseum", "historical", 90, 15.0),
            poi("Piazza Navona", "food", 60, 0.0),
            poi("Trevi Fountain", "relaxing", 30, 0.0),
        ];

        let visits = build_itinerary(&catalog, &interests(&["food"]), start("10:00"));

        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].name, "Piazza Navona");
        assert_eq!(visits[0].start.to_string(), "10:00");
    }

    #[test]
    fn unmatched_interests_yield_empty_itinerary() {
        let catalog = vec![poi("Colosseum", "historical", 90, 15.0)];

        let visits = build_itinerary(&catalog, &interests(&["shopping"]), start("09:00"));
        assert!(visits.is_empty());
    }

    #[test]
    fn empty_interest_set_yields_empty_itinerary() {
        let catalog = vec![poi("Colosseum", "historical", 90, 15.0)];

        let visits = build_itinerary(&catalog, &HashSet::new(), start("09:00"));
        assert!(visits.is_empty());
    }

    #[test]
    fn preserves_catalog_order_not_sorted() {
        // Catalog order is deliberately not re-sorted by duration or cost
        let catalog = vec![
            poi("Long Visit", "historical", 180, 20.0),
            poi("Short Visit", "historical", 30, 0.0),
            poi("Medium Visit", "historical", 60, 5.0),
        ];

        let visits = build_itinerary(&catalog, &interests(&["historical"]), start("08:00"));

        let names: Vec<&str> = visits.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["Long Visit", "Short Visit", "Medium Visit"]);
    }

    #[test]
    fn transport_fields_left_unset() {
        let catalog = vec![
            poi("Colosseum", "historical", 90, 15.0),
            poi("Roman Forum", "historical", 75, 12.0),
        ];

        let visits = build_itinerary(&catalog, &interests(&["historical"]), start("09:00"));

        for visit in &visits {
            assert!(visit.transport.is_none());
            assert!(visit.hop.is_none());
        }
    }

    #[test]
    fn running_clock_past_midnight() {
        let catalog = vec![
            poi("Evening Stroll", "relaxing", 120, 0.0),
            poi("Night Market", "food", 90, 0.0),
        ];

        let visits = build_itinerary(&catalog, &interests(&["relaxing", "food"]), start("22:30"));

        assert_eq!(visits[0].end.to_string(), "00:30 (+1d)");
        assert_eq!(visits[1].start.to_string(), "00:45 (+1d)");
        assert_eq!(visits[1].end.to_string(), "02:15 (+1d)");
        // Ordering still holds across midnight
        assert!(visits[1].start > visits[0].end);
    }
}
