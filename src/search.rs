// Combination Search - cheapest feasible set of units per location
// Tiered brute force: singles, then pairs, then triples over a
// price-sorted view of the location's listings.

use serde::{Deserialize, Serialize};

use crate::catalog::{group_by_location, Listing, VehicleRequirement};
use crate::fit::{fits, fits_combined};

/// Combinations never span more than this many listings.
/// Deliberate scope cap; the search is not a general n-way packer.
pub const MAX_COMBINATION_SIZE: usize = 3;

// ============================================================================
// RESULT TYPES
// ============================================================================

/// The winning combination within a single location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub listing_ids: Vec<String>,
    pub total_price_in_cents: u64,
}

/// One location's answer: which units to rent and what they cost together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub location_id: String,
    pub listing_ids: Vec<String>,
    pub total_price_in_cents: u64,
}

// ============================================================================
// PER-LOCATION SEARCH
// ============================================================================

/// Find the cheapest feasible combination of up to `MAX_COMBINATION_SIZE`
/// listings at one location, or `None` if nothing fits.
///
/// Listings are scanned in ascending `(price, id)` order, so tier 1 returns
/// the true cheapest single. Tiers 2 and 3 return the *first* feasible pair
/// or triple in index order over that sorted view, which is not always the
/// cheapest one at that tier. That first-found behavior is part of the
/// contract and must not be "improved".
pub fn find_cheapest_combination(
    location_listings: &[&Listing],
    vehicles: &[VehicleRequirement],
) -> Option<Combination> {
    // Sort a per-request copy; the shared catalog must never be reordered.
    let mut sorted: Vec<&Listing> = location_listings.to_vec();
    sorted.sort_by(|a, b| {
        a.price_in_cents
            .cmp(&b.price_in_cents)
            .then_with(|| a.id.cmp(&b.id))
    });

    // Tier 1: single listings, cheapest first
    for listing in &sorted {
        if fits(listing, vehicles) {
            return Some(Combination {
                listing_ids: vec![listing.id.clone()],
                total_price_in_cents: listing.price_in_cents,
            });
        }
    }

    // Tier 2: pairs, first feasible in index order
    for i in 0..sorted.len() {
        for j in (i + 1)..sorted.len() {
            let pair = [sorted[i], sorted[j]];
            if fits_combined(&pair, vehicles) {
                return Some(Combination {
                    listing_ids: vec![sorted[i].id.clone(), sorted[j].id.clone()],
                    total_price_in_cents: sorted[i].price_in_cents + sorted[j].price_in_cents,
                });
            }
        }
    }

    // Tier 3: triples, first feasible in index order
    for i in 0..sorted.len() {
        for j in (i + 1)..sorted.len() {
            for k in (j + 1)..sorted.len() {
                let triple = [sorted[i], sorted[j], sorted[k]];
                if fits_combined(&triple, vehicles) {
                    return Some(Combination {
                        listing_ids: vec![
                            sorted[i].id.clone(),
                            sorted[j].id.clone(),
                            sorted[k].id.clone(),
                        ],
                        total_price_in_cents: sorted[i].price_in_cents
                            + sorted[j].price_in_cents
                            + sorted[k].price_in_cents,
                    });
                }
            }
        }
    }

    None
}

// ============================================================================
// CATALOG-WIDE SEARCH
// ============================================================================

/// Search every location in the catalog for the given vehicle set.
///
/// Pure and total: malformed input is the caller's failure domain (see
/// `request::parse_vehicle_requirements`), and "nothing fits anywhere" is
/// the empty vector, not an error. Worst case is O(n^3) in the number of
/// listings at a location, which bounds request latency.
pub fn search(catalog: &[Listing], vehicles: &[VehicleRequirement]) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = Vec::new();

    for group in group_by_location(catalog) {
        if let Some(combination) = find_cheapest_combination(&group.listings, vehicles) {
            results.push(SearchResult {
                location_id: group.location_id,
                listing_ids: combination.listing_ids,
                total_price_in_cents: combination.total_price_in_cents,
            });
        }
    }

    // Stable sort: equal totals keep first-seen catalog order
    results.sort_by(|a, b| a.total_price_in_cents.cmp(&b.total_price_in_cents));

    results
}

// ============================================================================
// TESTS
// ============================================================================
