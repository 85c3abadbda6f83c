//! Weather forecast client and one-day summaries.
//!
//! Fetches the OpenWeatherMap 5-day forecast for a city and reduces the
//! 3-hourly entries for the tour day to an average temperature, dominant
//! condition, and packing recommendation. The planner itself never calls
//! this; the caller fetches weather alongside the plan.

mod client;
mod error;
mod summary;

pub use client::{ForecastEntry, ForecastResponse, WeatherClient, WeatherConfig};
pub use error::WeatherError;
pub use summary::{DaySummary, recommendation_for, summarize};
