//! Transport selection for itinerary hops.
//!
//! Walks the visit sequence in order, estimates the distance of each hop,
//! and greedily picks the cheapest transport option that fits the remaining
//! budget. The budget is soft: when nothing fits, the hop degrades to
//! walking instead of failing.

use tracing::{debug, trace};

use crate::domain::{Hop, PlanError, TransportCatalog, TransportMode, VisitEntry};

/// Hops at or under this distance are always walked, regardless of budget.
pub const WALK_THRESHOLD_KM: f64 = 1.0;

/// Distance returned by the placeholder estimator, in kilometers.
const PLACEHOLDER_DISTANCE_KM: f64 = 2.0;

/// Trait for estimating the distance between two consecutive stops.
///
/// This abstraction keeps the optimizer's control flow independent of how
/// distances are obtained: the placeholder below returns a constant, and a
/// real deployment can substitute a geolocation or routing backend.
pub trait DistanceEstimator {
    /// Estimated distance from `from` to `to`, in kilometers.
    fn estimate_km(&self, from: &VisitEntry, to: &VisitEntry) -> f64;
}

/// Placeholder estimator returning a fixed distance for every hop.
///
/// A stand-in for a real geodistance or routing call.
#[derive(Debug, Clone)]
pub struct FixedDistanceEstimator {
    distance_km: f64,
}

impl FixedDistanceEstimator {
    /// Create an estimator that reports `distance_km` for every hop.
    pub fn new(distance_km: f64) -> Self {
        Self { distance_km }
    }
}

impl Default for FixedDistanceEstimator {
    fn default() -> Self {
        Self::new(PLACEHOLDER_DISTANCE_KM)
    }
}

impl DistanceEstimator for FixedDistanceEstimator {
    fn estimate_km(&self, _from: &VisitEntry, _to: &VisitEntry) -> f64 {
        self.distance_km
    }
}

/// Assign a transport mode to every stop of an itinerary.
///
/// The first stop always gets walking with no hop fields. For every later
/// stop, the hop distance is estimated and a mode selected:
///
/// - distance at or under [`WALK_THRESHOLD_KM`]: walking, cost 0;
/// - otherwise the first option, in ascending per-km cost order, whose cost
///   for the hop fits the remaining budget (declaration order breaks ties);
/// - if nothing fits: walking, cost 0.
///
/// Spend accumulates across hops against the supplied budget. A negative
/// (or NaN) budget is an [`PlanError::InvalidBudget`]; an empty visit
/// sequence returns empty. The transport catalog is never mutated.
pub fn optimize_route(
    mut visits: Vec<VisitEntry>,
    budget: f64,
    options: &TransportCatalog,
    estimator: &dyn DistanceEstimator,
) -> Result<Vec<VisitEntry>, PlanError> {
    if !(budget >= 0.0) {
        return Err(PlanError::InvalidBudget(budget));
    }

    let mut spent = 0.0;

    for i in 0..visits.len() {
        if i == 0 {
            // The tour starts on foot; there is no hop to the first stop.
            visits[0].transport = Some(TransportMode::walking());
            continue;
        }

        let (before, after) = visits.split_at_mut(i);
        let from = &before[i - 1];
        let to = &mut after[0];

        let distance_km = estimator.estimate_km(from, to);
        let (mode, cost) = select_transport(distance_km, budget - spent, options);

        trace!(
            stop = %to.name,
            distance_km,
            mode = %mode,
            cost,
            remaining = budget - spent,
            "selected transport"
        );

        spent += cost;
        to.transport = Some(mode);
        to.hop = Some(Hop { distance_km, cost });
    }

    debug!(stops = visits.len(), spent, budget, "optimized route");
    Ok(visits)
}

/// Pick a mode for one hop given the remaining budget.
///
/// Returns the mode and the hop's cost at that mode's rate.
fn select_transport(
    distance_km: f64,
    remaining_budget: f64,
    options: &TransportCatalog,
) -> (TransportMode, f64) {
    // Short hops are always walked
    if distance_km <= WALK_THRESHOLD_KM {
        return (TransportMode::walking(), 0.0);
    }

    for option in options.sorted_by_cost() {
        let cost = option.cost_for(distance_km);
        if cost <= remaining_budget {
            return (option.mode.clone(), cost);
        }
    }

    // Nothing fits: degrade to walking rather than failing
    (TransportMode::walking(), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ClockTime, PointOfInterest, TransportOption};
    use crate::planner::build_itinerary;
    use std::collections::HashSet;

    fn sample_visits(count: usize) -> Vec<VisitEntry> {
        let interests: HashSet<Category> = [Category::parse("historical").unwrap()].into();
        let catalog: Vec<PointOfInterest> = (0..count)
            .map(|i| {
                PointOfInterest::new(
                    format!("Stop {i}"),
                    Category::parse("historical").unwrap(),
                    60,
                    0.0,
                )
                .unwrap()
            })
            .collect();
        build_itinerary(&catalog, &interests, ClockTime::parse_hhmm("09:00").unwrap())
    }

    /// A catalog with no free option, so budget actually constrains choice.
    fn paid_catalog() -> TransportCatalog {
        let mut catalog = TransportCatalog::new();
        catalog.add(TransportOption::new(
            TransportMode::new("public_transport"),
            0.5,
            20.0,
        ));
        catalog.add(TransportOption::new(TransportMode::new("taxi"), 1.5, 40.0));
        catalog
    }

    #[test]
    fn empty_itinerary_returns_empty() {
        let result = optimize_route(
            Vec::new(),
            50.0,
            &TransportCatalog::standard(),
            &FixedDistanceEstimator::default(),
        )
        .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn negative_budget_is_an_error() {
        let err = optimize_route(
            sample_visits(2),
            -1.0,
            &TransportCatalog::standard(),
            &FixedDistanceEstimator::default(),
        )
        .unwrap_err();
        assert_eq!(err, PlanError::InvalidBudget(-1.0));
    }

    #[test]
    fn nan_budget_is_an_error() {
        let err = optimize_route(
            sample_visits(2),
            f64::NAN,
            &TransportCatalog::standard(),
            &FixedDistanceEstimator::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::InvalidBudget(_)));
    }

    #[test]
    fn first_stop_walks_with_no_hop() {
        let visits = optimize_route(
            sample_visits(3),
            100.0,
            &TransportCatalog::standard(),
            &FixedDistanceEstimator::default(),
        )
        .unwrap();

        assert!(visits[0].transport.as_ref().unwrap().is_walking());
        assert!(visits[0].hop.is_none());
    }

    #[test]
    fn short_hops_always_walk() {
        let visits = optimize_route(
            sample_visits(3),
            1000.0,
            &paid_catalog(),
            &FixedDistanceEstimator::new(0.8),
        )
        .unwrap();

        for visit in &visits[1..] {
            assert!(visit.transport.as_ref().unwrap().is_walking());
            let hop = visit.hop.as_ref().unwrap();
            assert_eq!(hop.distance_km, 0.8);
            assert_eq!(hop.cost, 0.0);
        }
    }

    #[test]
    fn cheapest_fitting_option_wins() {
        // 2 km hop, budget 10: public transport (0.5/km = 1.0) fits and is
        // cheapest, so taxi is never chosen
        let visits = optimize_route(
            sample_visits(2),
            10.0,
            &paid_catalog(),
            &FixedDistanceEstimator::new(2.0),
        )
        .unwrap();

        let second = &visits[1];
        assert_eq!(second.transport.as_ref().unwrap().as_str(), "public_transport");
        let hop = second.hop.as_ref().unwrap();
        assert_eq!(hop.distance_km, 2.0);
        assert_eq!(hop.cost, 1.0);
    }

    #[test]
    fn free_walking_option_fits_any_budget() {
        // With the standard catalog, walking's 0/km cost always fits first
        let visits = optimize_route(
            sample_visits(2),
            100.0,
            &TransportCatalog::standard(),
            &FixedDistanceEstimator::new(2.0),
        )
        .unwrap();

        assert!(visits[1].transport.as_ref().unwrap().is_walking());
        assert_eq!(visits[1].hop.as_ref().unwrap().cost, 0.0);
    }

    #[test]
    fn zero_budget_degrades_to_walking() {
        // 2 km apart, budget 0: nothing paid fits, walk anyway
        let visits = optimize_route(
            sample_visits(2),
            0.0,
            &paid_catalog(),
            &FixedDistanceEstimator::new(2.0),
        )
        .unwrap();

        let second = &visits[1];
        assert!(second.transport.as_ref().unwrap().is_walking());
        let hop = second.hop.as_ref().unwrap();
        assert_eq!(hop.distance_km, 2.0);
        assert_eq!(hop.cost, 0.0);
    }

    #[test]
    fn spend_accumulates_across_hops() {
        // 3 hops of 2 km at 0.5/km = 1.0 each; budget 2.5 covers two hops,
        // the third falls back to walking
        let visits = optimize_route(
            sample_visits(4),
            2.5,
            &paid_catalog(),
            &FixedDistanceEstimator::new(2.0),
        )
        .unwrap();

        assert_eq!(visits[1].transport.as_ref().unwrap().as_str(), "public_transport");
        assert_eq!(visits[2].transport.as_ref().unwrap().as_str(), "public_transport");
        assert!(visits[3].transport.as_ref().unwrap().is_walking());
        assert_eq!(visits[3].hop.as_ref().unwrap().cost, 0.0);
    }

    #[test]
    fn equal_cost_tie_breaks_by_declaration_order() {
        let mut catalog = TransportCatalog::new();
        catalog.add(TransportOption::new(TransportMode::new("tram"), 0.5, 18.0));
        catalog.add(TransportOption::new(TransportMode::new("bus"), 0.5, 15.0));

        let visits = optimize_route(
            sample_visits(2),
            10.0,
            &catalog,
            &FixedDistanceEstimator::new(2.0),
        )
        .unwrap();

        assert_eq!(visits[1].transport.as_ref().unwrap().as_str(), "tram");
    }

    #[test]
    fn empty_transport_catalog_walks_everywhere() {
        let visits = optimize_route(
            sample_visits(3),
            100.0,
            &TransportCatalog::new(),
            &FixedDistanceEstimator::new(5.0),
        )
        .unwrap();

        for visit in &visits[1..] {
            assert!(visit.transport.as_ref().unwrap().is_walking());
        }
    }

    #[test]
    fn times_are_untouched_by_optimization() {
        let before = sample_visits(3);
        let after = optimize_route(
            before.clone(),
            10.0,
            &paid_catalog(),
            &FixedDistanceEstimator::new(2.0),
        )
        .unwrap();

        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(b.start, a.start);
            assert_eq!(b.end, a.end);
            assert_eq!(b.name, a.name);
        }
    }
}
