//! Built-in demo catalog data.

use crate::domain::{Category, PointOfInterest};

use super::StaticCatalog;

/// Add an entry to the catalog, skipping it if the data is invalid.
fn add(catalog: &mut StaticCatalog, city: &str, name: &str, category: &str, mins: u32, cost: f64) {
    if let Ok(cat) = Category::parse(category) {
        if let Ok(poi) = PointOfInterest::new(name, cat, mins, cost) {
            catalog.add(city, poi);
        }
    }
}

/// Create the built-in demo catalog (Rome and Paris).
///
/// A stand-in for a dynamic data source; entry order is the order visits
/// are laid out in.
pub fn demo_catalog() -> StaticCatalog {
    let mut catalog = StaticCatalog::new();

    add(&mut catalog, "Rome", "Colosseum", "historical", 90, 15.0);
    add(&mut catalog, "Rome", "Roman Forum", "historical", 75, 12.0);
    add(&mut catalog, "Rome", "Pantheon", "historical", 45, 0.0);
    add(&mut catalog, "Rome", "Piazza Navona", "food", 60, 0.0);
    add(&mut catalog, "Rome", "Trevi Fountain", "relaxing", 30, 0.0);
    add(&mut catalog, "Rome", "Spanish Steps", "relaxing", 45, 0.0);

    add(&mut catalog, "Paris", "Eiffel Tower", "historical", 120, 25.0);
    add(&mut catalog, "Paris", "Louvre Museum", "historical", 180, 20.0);
    add(&mut catalog, "Paris", "Montmartre", "shopping", 60, 0.0);
    add(&mut catalog, "Paris", "Notre Dame", "historical", 60, 0.0);
    add(&mut catalog, "Paris", "Seine River Cruise", "relaxing", 90, 15.0);

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogProvider;

    #[test]
    fn demo_catalog_has_both_cities() {
        let catalog = demo_catalog();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("Rome").unwrap().len(), 6);
        assert_eq!(catalog.lookup("Paris").unwrap().len(), 5);
    }

    #[test]
    fn rome_catalog_order() {
        let catalog = demo_catalog();
        let names: Vec<&str> = catalog
            .lookup("Rome")
            .unwrap()
            .iter()
            .map(|p| p.name())
            .collect();

        assert_eq!(
            names,
            [
                "Colosseum",
                "Roman Forum",
                "Pantheon",
                "Piazza Navona",
                "Trevi Fountain",
                "Spanish Steps",
            ]
        );
    }
}
