// Multi-Vehicle Search - Core Library
// Exposes all modules for use in the CLI, API server, and tests

pub mod catalog;
pub mod fit;
pub mod request;
pub mod search;

// Re-export commonly used types
pub use catalog::{group_by_location, load_listings, Listing, LocationGroup, VehicleRequirement};
pub use fit::{fits, fits_combined, total_vehicle_area, VEHICLE_WIDTH};
pub use request::{parse_vehicle_requirements, RequestFormatError};
pub use search::{
    find_cheapest_combination, search, Combination, SearchResult, MAX_COMBINATION_SIZE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
