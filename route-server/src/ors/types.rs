//! OpenRouteService directions response DTOs.
//!
//! ORS answers GeoJSON: a FeatureCollection whose first feature is the
//! route, with aggregates under `properties.summary` and optional step
//! detail under `properties.segments`.

use serde::Deserialize;

/// GeoJSON FeatureCollection response from `/v2/directions/{profile}`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrsResponse {
    #[serde(default)]
    pub features: Vec<OrsRoute>,
}

/// A route feature.
#[derive(Debug, Clone, Deserialize)]
pub struct OrsRoute {
    pub geometry: OrsGeometry,
    pub properties: OrsProperties,
}

/// Route geometry, `[lon, lat]` positions.
#[derive(Debug, Clone, Deserialize)]
pub struct OrsGeometry {
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}

/// Feature properties carrying aggregates and segments.
#[derive(Debug, Clone, Deserialize)]
pub struct OrsProperties {
    pub summary: OrsSummary,

    #[serde(default)]
    pub segments: Vec<OrsSegment>,
}

/// Aggregate distance/duration for the whole route.
#[derive(Debug, Clone, Deserialize)]
pub struct OrsSummary {
    pub distance: Option<f64>,
    pub duration: Option<f64>,
}

/// One segment between consecutive via-points.
#[derive(Debug, Clone, Deserialize)]
pub struct OrsSegment {
    #[serde(default)]
    pub steps: Vec<OrsStep>,
}

/// A turn-by-turn step. ORS ships ready-made instruction text and a numeric
/// instruction type instead of OSRM's type/modifier pair.
#[derive(Debug, Clone, Deserialize)]
pub struct OrsStep {
    pub instruction: Option<String>,

    pub name: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<i64>,

    pub distance: Option<f64>,

    pub duration: Option<f64>,
}
