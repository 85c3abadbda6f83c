//! End-to-end tour planning.
//!
//! Ties the capabilities together: validates a raw planning request,
//! resolves the city catalog, lays out the itinerary and assigns transport.

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::CatalogProvider;
use crate::domain::{Category, ClockTime, PlanError, TransportCatalog, VisitEntry};

use super::itinerary::build_itinerary;
use super::route::{DistanceEstimator, optimize_route};

/// A raw tour planning request, as collected from a user.
///
/// City, start time, and interests arrive as strings and are validated when
/// the plan is made.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// City to plan the tour in (exact catalog name).
    pub city: String,

    /// Interest category tags. Tags that parse to no valid category are
    /// ignored; they could not match any catalog entry anyway.
    pub interests: Vec<String>,

    /// Tour start time in 24-hour "HH:MM" format.
    pub start_time: String,

    /// Soft transport budget.
    pub budget: f64,
}

impl PlanRequest {
    /// Create a new planning request.
    pub fn new(
        city: impl Into<String>,
        interests: impl IntoIterator<Item = impl Into<String>>,
        start_time: impl Into<String>,
        budget: f64,
    ) -> Self {
        Self {
            city: city.into(),
            interests: interests.into_iter().map(Into::into).collect(),
            start_time: start_time.into(),
            budget,
        }
    }
}

/// A finished one-day tour plan.
#[derive(Debug, Clone)]
pub struct TourPlan {
    /// City the plan is for.
    pub city: String,

    /// Ordered, timed visits with transport annotations.
    pub visits: Vec<VisitEntry>,
}

impl TourPlan {
    /// Total transport spend across all hops.
    pub fn transport_spend(&self) -> f64 {
        self.visits
            .iter()
            .filter_map(|v| v.hop.as_ref())
            .map(|h| h.cost)
            .sum()
    }

    /// Total attraction entry cost.
    pub fn entry_cost(&self) -> f64 {
        self.visits.iter().map(|v| v.cost).sum()
    }

    /// Returns true if the plan has no stops.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}

/// The tour planner.
///
/// Holds the injected capabilities: a catalog provider, the transport
/// option set, and a distance estimator. Each call operates only on its own
/// inputs; there is no shared mutable state between plans.
pub struct Planner<'a, C: CatalogProvider, E: DistanceEstimator> {
    catalog: &'a C,
    transport: &'a TransportCatalog,
    estimator: &'a E,
}

impl<'a, C: CatalogProvider, E: DistanceEstimator> Planner<'a, C, E> {
    /// Create a new planner.
    pub fn new(catalog: &'a C, transport: &'a TransportCatalog, estimator: &'a E) -> Self {
        Self {
            catalog,
            transport,
            estimator,
        }
    }

    /// Plan a one-day tour from a raw request.
    ///
    /// Validates the request, then runs the itinerary builder and transport
    /// optimizer in sequence. Errors surface before any work is done, so a
    /// failed call has no partial result.
    ///
    /// # Errors
    ///
    /// - [`PlanError::InvalidTime`] if the start time is not valid "HH:MM".
    /// - [`PlanError::InvalidBudget`] if the budget is negative.
    /// - [`PlanError::UnknownCity`] if the catalog has no data for the city.
    pub fn plan(&self, request: &PlanRequest) -> Result<TourPlan, PlanError> {
        let start = ClockTime::parse_hhmm(&request.start_time)?;

        if !(request.budget >= 0.0) {
            return Err(PlanError::InvalidBudget(request.budget));
        }

        let catalog = self
            .catalog
            .lookup(&request.city)
            .ok_or_else(|| PlanError::UnknownCity(request.city.clone()))?;

        let mut interests: HashSet<Category> = HashSet::new();
        for tag in &request.interests {
            match Category::parse(tag) {
                Ok(category) => {
                    interests.insert(category);
                }
                Err(err) => {
                    // An unparseable tag cannot match any catalog entry;
                    // treat it like any other unmatched interest
                    debug!(tag = %tag, %err, "ignoring invalid interest tag");
                }
            }
        }

        let visits = build_itinerary(catalog, &interests, start);
        let visits = optimize_route(visits, request.budget, self.transport, self.estimator)?;

        Ok(TourPlan {
            city: request.city.clone(),
            visits,
        })
    }
}
