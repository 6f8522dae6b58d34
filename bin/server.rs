// Multi-Vehicle Search - Web Server
// POST / with a JSON array of vehicle requirements; answers per location

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use multi_vehicle_search::{
    load_listings, parse_vehicle_requirements, search, Listing, SearchResult, VERSION,
};

const DEFAULT_LISTINGS_PATH: &str = "listings.json";
const DEFAULT_PORT: u16 = 3000;

/// Shared application state
///
/// The catalog is loaded once and stays read-only; concurrent requests
/// search it without coordination.
#[derive(Clone)]
struct AppState {
    catalog: Arc<Vec<Listing>>,
    listings_path: String,
    catalog_loaded: bool,
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    message: String,
    version: String,
    timestamp: String,
}

/// Catalog diagnostics response
#[derive(Serialize)]
struct DebugResponse {
    listings_path: String,
    catalog_loaded: bool,
    listing_count: usize,
    location_count: usize,
}

// ============================================================================
// API Handlers
// ============================================================================

/// POST / - Run the combination search for a set of vehicle requirements
async fn search_vehicles(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let vehicles = match parse_vehicle_requirements(&body) {
        Ok(vehicles) => vehicles,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    let results: Vec<SearchResult> = search(&state.catalog, &vehicles);

    (StatusCode::OK, Json(results)).into_response()
}

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        message: "Multi-Vehicle Search API is running!".to_string(),
        version: VERSION.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /api/debug - Catalog diagnostics
async fn debug_info(State(state): State<AppState>) -> impl IntoResponse {
    let location_count = multi_vehicle_search::group_by_location(&state.catalog).len();

    Json(DebugResponse {
        listings_path: state.listings_path.clone(),
        catalog_loaded: state.catalog_loaded,
        listing_count: state.catalog.len(),
        location_count,
    })
}

/// GET / - Serve info page
async fn serve_index(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        r#"<html>
  <body>
    <h1>Multi-Vehicle Search API</h1>
    <p>This API accepts POST requests with vehicle data.</p>
    <h2>Example usage:</h2>
    <pre>
curl -X POST "http://localhost:{}/" \
  -H "Content-Type: application/json" \
  -d '[
    {{
      "length": 10,
      "quantity": 1
    }}
  ]'
    </pre>
    <p>Loaded {} listings</p>
  </body>
</html>"#,
        server_port(),
        state.catalog.len()
    ))
}

// ============================================================================
// Main Server
// ============================================================================

fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() {
    println!("🌐 Multi-Vehicle Search - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let listings_path =
        std::env::var("LISTINGS_PATH").unwrap_or_else(|_| DEFAULT_LISTINGS_PATH.to_string());

    // A missing or unparsable catalog is a configuration error; serve an
    // empty catalog (every search answers []) instead of exiting.
    let (catalog, catalog_loaded) = match load_listings(&listings_path) {
        Ok(listings) => {
            println!("✓ Loaded {} listings from {}", listings.len(), listings_path);
            (listings, true)
        }
        Err(e) => {
            eprintln!("❌ Could not load listings catalog: {:#}", e);
            eprintln!("   Serving an empty catalog; every search will return []");
            eprintln!("   Set LISTINGS_PATH or place a catalog at ./{}", DEFAULT_LISTINGS_PATH);
            (Vec::new(), false)
        }
    };

    // Create shared state
    let state = AppState {
        catalog: Arc::new(catalog),
        listings_path,
        catalog_loaded,
    };

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/debug", get(debug_info));

    // Build main router
    let app = Router::new()
        .route("/", get(serve_index).post(search_vehicles))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(CorsLayer::permissive());

    // Start server
    let port = server_port();
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:{}", port);
    println!("   Search: POST http://localhost:{}/", port);
    println!("   Health: http://localhost:{}/api/health", port);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
