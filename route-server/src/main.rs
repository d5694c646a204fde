use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use route_server::geocode::{NominatimClient, NominatimConfig};
use route_server::ors::{OrsClient, OrsConfig};
use route_server::osrm::{OsrmClient, OsrmConfig};
use route_server::routing::{RoutePlanner, WalkingApi};
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Directions backends. The pedestrian chain may point at a separate
    // walking-capable server; by default it reuses the main one.
    let osrm_base = std::env::var("OSRM_BASE_URL").ok();
    let mut car_config = OsrmConfig::new();
    if let Some(base) = &osrm_base {
        car_config = car_config.with_base_url(base.clone());
    }
    let car = OsrmClient::new(car_config).expect("Failed to create OSRM client");

    let mut pedestrian_config = OsrmConfig::new();
    if let Some(base) = std::env::var("OSRM_PEDESTRIAN_URL").ok().or(osrm_base) {
        pedestrian_config = pedestrian_config.with_base_url(base);
    }
    let pedestrian =
        OsrmClient::new(pedestrian_config).expect("Failed to create pedestrian OSRM client");

    // The alternate walking backend only joins the chain with a usable key.
    let walking_fallback: Option<Arc<dyn WalkingApi>> = match std::env::var("ORS_API_KEY") {
        Ok(key) if !key.is_empty() && key != "DISABLED" => {
            let client = OrsClient::new(OrsConfig::new(key)).expect("Failed to create ORS client");
            Some(Arc::new(client))
        }
        _ => {
            eprintln!("Note: ORS_API_KEY not set; walking falls back to driving when OSRM has no pedestrian data.");
            None
        }
    };

    let planner = RoutePlanner::new(Arc::new(car), Arc::new(pedestrian), walking_fallback);

    let geocoder =
        NominatimClient::new(NominatimConfig::new()).expect("Failed to create geocoding client");

    let state = AppState::new(planner, geocoder);

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let app = create_router(state, &static_dir);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    println!("Route planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health   - Health check");
    println!("  GET /route    - Compute a route (profile, start, end)");
    println!("  GET /geocode  - Place search (q, limit)");
    println!("  GET /poi      - Points of interest (category, limit)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
