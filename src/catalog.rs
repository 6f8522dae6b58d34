// Catalog - Listings, vehicle requirements, and location grouping
// The catalog is loaded once at startup and stays read-only for the
// lifetime of the process; searches never mutate it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// ============================================================================
// DATA MODEL
// ============================================================================

/// A rentable rectangular storage unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Opaque identifier, unique within the catalog
    pub id: String,

    /// Grouping key; combinations are never formed across locations
    pub location_id: String,

    /// Length in storage units
    pub length: f64,

    /// Width in storage units
    pub width: f64,

    /// Price in the smallest currency unit
    pub price_in_cents: u64,
}

impl Listing {
    /// Floor area of the unit
    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}

/// How many vehicles of a given length must be stored.
/// Vehicle width is the system-wide constant in `fit::VEHICLE_WIDTH`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRequirement {
    pub length: f64,
    pub quantity: u32,
}

/// All listings at one location, in catalog order.
/// Derived per request, never persisted.
#[derive(Debug, Clone)]
pub struct LocationGroup<'a> {
    pub location_id: String,
    pub listings: Vec<&'a Listing>,
}

// ============================================================================
// CATALOG LOADING
// ============================================================================

/// Load the listing catalog from a JSON file.
///
/// A failure here is a startup/configuration error; callers decide whether
/// to abort (CLI) or degrade to an empty catalog (server).
pub fn load_listings<P: AsRef<Path>>(path: P) -> Result<Vec<Listing>> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read listings file: {:?}", path.as_ref()))?;

    let listings: Vec<Listing> =
        serde_json::from_str(&content).context("Failed to parse listings JSON")?;

    Ok(listings)
}

// ============================================================================
// LOCATION GROUPING
// ============================================================================

/// Partition the catalog by location, preserving first-seen catalog order.
/// The order is part of the contract: it breaks price ties in the final
/// result list deterministically.
pub fn group_by_location(listings: &[Listing]) -> Vec<LocationGroup<'_>> {
    let mut groups: Vec<LocationGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for listing in listings {
        match index.get(listing.location_id.as_str()) {
            Some(&i) => groups[i].listings.push(listing),
            None => {
                index.insert(listing.location_id.as_str(), groups.len());
                groups.push(LocationGroup {
                    location_id: listing.location_id.clone(),
                    listings: vec![listing],
                });
            }
        }
    }

    groups
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, location_id: &str, length: f64, width: f64, price: u64) -> Listing {
        Listing {
            id: id.to_string(),
            location_id: location_id.to_string(),
            length,
            width,
            price_in_cents: price,
        }
    }

    #[test]
    fn test_listing_area() {
        let l = listing("l1", "loc1", 20.0, 10.0, 500);
        assert_eq!(l.area(), 200.0);
    }

    #[test]
    fn test_group_by_location_first_seen_order() {
        let catalog = vec![
            listing("a", "loc2", 10.0, 10.0, 100),
            listing("b", "loc1", 10.0, 10.0, 200),
            listing("c", "loc2", 10.0, 10.0, 300),
            listing("d", "loc3", 10.0, 10.0, 400),
            listing("e", "loc1", 10.0, 10.0, 500),
        ];

        let groups = group_by_location(&catalog);

        let order: Vec<&str> = groups.iter().map(|g| g.location_id.as_str()).collect();
        assert_eq!(
            order,
            vec!["loc2", "loc1", "loc3"],
            "Groups should appear in first-seen catalog order"
        );

        let loc2_ids: Vec<&str> = groups[0].listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(loc2_ids, vec!["a", "c"]);
        let loc1_ids: Vec<&str> = groups[1].listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(loc1_ids, vec!["b", "e"]);
    }

    #[test]
    fn test_group_by_location_empty_catalog() {
        let groups = group_by_location(&[]);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_listing_json_round_trip() {
        let json = r#"{
            "id": "abc-123",
            "location_id": "loc-9",
            "length": 20,
            "width": 10,
            "price_in_cents": 1500
        }"#;

        let parsed: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, "abc-123");
        assert_eq!(parsed.location_id, "loc-9");
        assert_eq!(parsed.length, 20.0);
        assert_eq!(parsed.width, 10.0);
        assert_eq!(parsed.price_in_cents, 1500);
    }

    #[test]
    fn test_load_listings_missing_file() {
        let err = load_listings("/nonexistent/listings.json").unwrap_err();
        assert!(
            err.to_string().contains("Failed to read listings file"),
            "Error should name the listings file: {}",
            err
        );
    }

    #[test]
    fn test_load_listings_from_file() {
        let path = std::env::temp_dir().join("mvs_test_listings.json");
        fs::write(
            &path,
            r#"[
                {"id": "l1", "location_id": "loc1", "length": 10, "width": 10, "price_in_cents": 300},
                {"id": "l2", "location_id": "loc1", "length": 20, "width": 10, "price_in_cents": 1000}
            ]"#,
        )
        .unwrap();

        let listings = load_listings(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].id, "l1");
        assert_eq!(listings[1].price_in_cents, 1000);
    }
}
