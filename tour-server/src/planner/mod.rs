//! One-day tour planning.
//!
//! Two components composed in a strict pipeline: the itinerary builder
//! filters a city catalog by interest categories and lays out timed visits;
//! the transport optimizer then assigns a mode to each hop under a soft
//! budget. Data flows one way through the visit sequence; there is no
//! feedback loop.

mod itinerary;
mod plan;
mod route;

pub use itinerary::{STOP_BUFFER_MINUTES, build_itinerary};
pub use plan::{PlanRequest, Planner, TourPlan};
pub use route::{
    DistanceEstimator, FixedDistanceEstimator, WALK_THRESHOLD_KM, optimize_route,
};
