//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::NormalizedRoute;

/// Query parameters for `GET /route`.
#[derive(Debug, Deserialize)]
pub struct RouteParams {
    /// Routing profile, "car" (default) or "walk".
    pub profile: Option<String>,

    /// Start point as "lat,lon".
    pub start: Option<String>,

    /// End point as "lat,lon".
    pub end: Option<String>,
}

/// Query parameters for `GET /geocode`.
#[derive(Debug, Deserialize)]
pub struct GeocodeParams {
    /// Free-text search query.
    pub q: Option<String>,

    /// Maximum number of results.
    pub limit: Option<usize>,
}

/// Query parameters for `GET /poi`.
#[derive(Debug, Deserialize)]
pub struct PoiParams {
    /// POI category name.
    pub category: Option<String>,

    /// Maximum number of results.
    pub limit: Option<usize>,
}

/// Response body for `GET /route`.
///
/// The normalized route plus the derived `fallback` flag, true exactly
/// when warnings are attached.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    #[serde(flatten)]
    pub route: NormalizedRoute,

    pub fallback: bool,
}

impl RouteResponse {
    pub fn new(route: NormalizedRoute) -> Self {
        let fallback = route.is_fallback();
        Self { route, fallback }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
