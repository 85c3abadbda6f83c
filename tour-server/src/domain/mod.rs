//! Domain types for the tour planner.
//!
//! This module contains the core domain model types that represent
//! validated tour data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod category;
mod error;
mod poi;
mod time;
mod transport;
mod visit;

pub use category::{Category, InvalidCategory};
pub use error::PlanError;
pub use poi::{InvalidPoi, PointOfInterest};
pub use time::{ClockTime, TimeError};
pub use transport::{TransportCatalog, TransportMode, TransportOption};
pub use visit::{Hop, VisitEntry};
