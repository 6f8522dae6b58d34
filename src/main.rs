use anyhow::{Context, Result};
use std::env;
use std::path::Path;

// Use library instead of local modules
use multi_vehicle_search::{load_listings, parse_vehicle_requirements, search};

const DEFAULT_LISTINGS_PATH: &str = "listings.json";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: multi-vehicle-search <vehicles.json> [listings.json]");
        eprintln!();
        eprintln!("  <vehicles.json>  JSON array of {{\"length\", \"quantity\"}} requirements");
        eprintln!("  [listings.json]  listing catalog (default: {})", DEFAULT_LISTINGS_PATH);
        std::process::exit(1);
    }

    let vehicles_path = &args[1];
    let listings_path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_LISTINGS_PATH);

    run_search(vehicles_path, listings_path)
}

fn run_search(vehicles_path: &str, listings_path: &str) -> Result<()> {
    eprintln!("🔍 Multi-Vehicle Search");
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if !Path::new(listings_path).exists() {
        eprintln!("❌ Listings catalog not found: {}", listings_path);
        eprintln!("   Provide a catalog file as the second argument,");
        eprintln!("   or place one at ./{}", DEFAULT_LISTINGS_PATH);
        std::process::exit(1);
    }

    // 1. Load catalog
    let listings = load_listings(listings_path)?;
    eprintln!("✓ Loaded {} listings from {}", listings.len(), listings_path);

    // 2. Load and validate vehicle requirements
    let raw = std::fs::read_to_string(vehicles_path)
        .with_context(|| format!("Failed to read vehicles file: {}", vehicles_path))?;
    let body: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse vehicles JSON: {}", vehicles_path))?;
    let vehicles = parse_vehicle_requirements(&body)
        .map_err(|e| anyhow::anyhow!("Invalid vehicles file: {}", e))?;
    eprintln!("✓ {} vehicle requirement(s)", vehicles.len());

    // 3. Search
    let results = search(&listings, &vehicles);
    eprintln!("✓ {} location(s) can accommodate the request\n", results.len());

    // 4. Emit results (stdout only, so output can be piped)
    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
