//! Point-of-interest catalogs.
//!
//! A catalog maps a city name to its list of points of interest. The
//! planner only sees the `CatalogProvider` capability, so a database-backed
//! or API-backed catalog can replace the static one without touching the
//! planning code.

mod builtin;

pub use builtin::demo_catalog;

use std::collections::HashMap;

use crate::domain::PointOfInterest;

/// Trait for looking up a city's point-of-interest catalog.
///
/// This abstraction allows the planner to be tested with ad-hoc catalogs
/// and lets real deployments swap in a dynamic data source.
pub trait CatalogProvider {
    /// Get the catalog for a city, in catalog order.
    ///
    /// Returns `None` if the city is unknown. Lookup is exact and
    /// case-sensitive.
    fn lookup(&self, city: &str) -> Option<&[PointOfInterest]>;
}

/// An in-memory catalog of cities and their points of interest.
///
/// Entry order within a city is preserved: the itinerary builder visits
/// attractions in catalog order.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    cities: HashMap<String, Vec<PointOfInterest>>,
}

impl StaticCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point of interest to a city, creating the city if needed.
    ///
    /// Entries are appended in call order.
    pub fn add(&mut self, city: impl Into<String>, poi: PointOfInterest) {
        self.cities.entry(city.into()).or_default().push(poi);
    }

    /// Returns the known city names, in no particular order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    /// Returns the number of known cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if no cities are known.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl CatalogProvider for StaticCatalog {
    fn lookup(&self, city: &str) -> Option<&[PointOfInterest]> {
        self.cities.get(city).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn poi(name: &str, cat: &str) -> PointOfInterest {
        PointOfInterest::new(name, Category::parse(cat).unwrap(), 60, 0.0).unwrap()
    }

    #[test]
    fn lookup_known_city() {
        let mut catalog = StaticCatalog::new();
        catalog.add("Rome", poi("Colosseum", "historical"));
        catalog.add("Rome", poi("Trevi Fountain", "relaxing"));

        let entries = catalog.lookup("Rome").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name(), "Colosseum");
        assert_eq!(entries[1].name(), "Trevi Fountain");
    }

    #[test]
    fn lookup_unknown_city() {
        let catalog = StaticCatalog::new();
        assert!(catalog.lookup("Atlantis").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut catalog = StaticCatalog::new();
        catalog.add("Rome", poi("Colosseum", "historical"));

        assert!(catalog.lookup("Rome").is_some());
        assert!(catalog.lookup("rome").is_none());
    }

    #[test]
    fn preserves_insertion_order() {
        let mut catalog = StaticCatalog::new();
        for name in ["A", "B", "C", "D"] {
            catalog.add("Rome", poi(name, "historical"));
        }

        let names: Vec<&str> = catalog
            .lookup("Rome")
            .unwrap()
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
    }
}
