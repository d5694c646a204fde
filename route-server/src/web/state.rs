//! Application state for the web layer.

use std::sync::Arc;

use crate::geocode::NominatimClient;
use crate::routing::RoutePlanner;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Routing orchestrator over the configured directions backends.
    pub planner: Arc<RoutePlanner>,

    /// Place search client.
    pub geocoder: Arc<NominatimClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: RoutePlanner, geocoder: NominatimClient) -> Self {
        Self {
            planner: Arc::new(planner),
            geocoder: Arc::new(geocoder),
        }
    }
}
