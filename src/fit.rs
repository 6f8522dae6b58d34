// Fit Checker - Can a set of listings hold a set of vehicles?
// Orientation + area heuristic, not geometric packing: a listing may be
// accepted even when the vehicles cannot actually tile its rectangle.
// That approximation is part of the contract.

use crate::catalog::{Listing, VehicleRequirement};

/// Every vehicle is this wide, in the same units as listing dimensions.
/// System-wide constant, not configurable per request.
pub const VEHICLE_WIDTH: f64 = 10.0;

/// Total floor footprint of a requirement set: sum of length x width x quantity.
pub fn total_vehicle_area(vehicles: &[VehicleRequirement]) -> f64 {
    vehicles
        .iter()
        .map(|v| v.length * VEHICLE_WIDTH * v.quantity as f64)
        .sum()
}

/// Whether a single listing can hold the whole requirement set.
///
/// The orientation check is a whole-set check: all vehicles must share one
/// orientation inside the unit. A set where one requirement only fits
/// lengthwise and another only fits crosswise is rejected, because that
/// combination is not consistent within a single rectangle.
pub fn fits(listing: &Listing, vehicles: &[VehicleRequirement]) -> bool {
    let fits_normal = vehicles
        .iter()
        .all(|v| v.length <= listing.length && VEHICLE_WIDTH <= listing.width);

    let fits_rotated = vehicles
        .iter()
        .all(|v| v.length <= listing.width && VEHICLE_WIDTH <= listing.length);

    if !fits_normal && !fits_rotated {
        return false;
    }

    // Area bound: necessary but not sufficient.
    listing.area() >= total_vehicle_area(vehicles)
}

/// Whether a combination of listings, pooled, can hold the requirement set.
///
/// Two bounds, both required:
/// 1. combined listing area covers the total vehicle footprint;
/// 2. every requirement type passes the single-listing check against at
///    least one member of the combination on its own (quantity preserved).
///
/// The second bound does not assign types to units, so two types may both
/// count on the same unit. Known approximation, kept deliberately.
pub fn fits_combined(listings: &[&Listing], vehicles: &[VehicleRequirement]) -> bool {
    let combined_area: f64 = listings.iter().map(|l| l.area()).sum();

    if combined_area < total_vehicle_area(vehicles) {
        return false;
    }

    vehicles.iter().all(|vehicle_type| {
        listings
            .iter()
            .any(|listing| fits(listing, std::slice::from_ref(vehicle_type)))
    })
}

// ============================================================================
// TESTS
// ============================================================================
