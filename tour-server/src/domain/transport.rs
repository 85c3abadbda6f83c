//! Transport modes and the transport option catalog.
//!
//! The set of transport options is statically configured and never mutated
//! at runtime. Walking is special-cased throughout the optimizer: it is the
//! default mode for the first stop, the forced mode for short hops, and the
//! fallback when nothing else fits the budget.

use std::fmt;

/// A transport mode identifier (e.g. "walking", "public_transport", "taxi").
///
/// # Examples
///
/// ```
/// use tour_server::domain::TransportMode;
///
/// let taxi = TransportMode::new("taxi");
/// assert!(!taxi.is_walking());
/// assert!(TransportMode::walking().is_walking());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TransportMode(String);

impl TransportMode {
    /// Create a mode from an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The walking mode, used as default and fallback.
    pub fn walking() -> Self {
        Self("walking".to_string())
    }

    /// Returns true if this is the walking mode.
    pub fn is_walking(&self) -> bool {
        self.0 == "walking"
    }

    /// Returns the mode identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransportMode({})", self.0)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A transport option: a mode with its per-kilometer cost and speed.
///
/// The speed is part of the option's identity but no computation currently
/// uses it; selection is cost-first.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportOption {
    /// The mode this option provides.
    pub mode: TransportMode,

    /// Cost per kilometer travelled.
    pub cost_per_km: f64,

    /// Typical speed in km/h.
    pub speed_kmh: f64,
}

impl TransportOption {
    /// Create a new transport option.
    pub fn new(mode: TransportMode, cost_per_km: f64, speed_kmh: f64) -> Self {
        Self {
            mode,
            cost_per_km,
            speed_kmh,
        }
    }

    /// Cost of covering `distance_km` with this option.
    pub fn cost_for(&self, distance_km: f64) -> f64 {
        distance_km * self.cost_per_km
    }
}

/// The finite, ordered set of transport options available to the optimizer.
///
/// Declaration order matters: when two options have the same per-km cost,
/// the one declared first wins, so selection is reproducible.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalog {
    options: Vec<TransportOption>,
}

impl TransportCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option to the catalog, preserving declaration order.
    pub fn add(&mut self, option: TransportOption) {
        self.options.push(option);
    }

    /// The standard demo catalog: walking, public transport, taxi.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.add(TransportOption::new(TransportMode::walking(), 0.0, 5.0));
        catalog.add(TransportOption::new(
            TransportMode::new("public_transport"),
            0.5,
            20.0,
        ));
        catalog.add(TransportOption::new(TransportMode::new("taxi"), 1.5, 40.0));
        catalog
    }

    /// Returns the options in declaration order.
    pub fn options(&self) -> &[TransportOption] {
        &self.options
    }

    /// Returns the options sorted ascending by per-km cost.
    ///
    /// The sort is stable, so equal-cost options keep declaration order.
    pub fn sorted_by_cost(&self) -> Vec<&TransportOption> {
        let mut sorted: Vec<&TransportOption> = self.options.iter().collect();
        sorted.sort_by(|a, b| {
            a.cost_per_km
                .partial_cmp(&b.cost_per_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        sorted
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the catalog has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
