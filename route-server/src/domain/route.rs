//! The provider-independent route representation.
//!
//! Every routing backend response is converted into [`NormalizedRoute`]
//! before it reaches the web layer or the controller; provider-specific
//! shapes stop at the adapter boundary.

use serde::{Deserialize, Serialize};

use super::point::GeoPoint;
use super::profile::RouteProfile;

/// Routing backend that produced a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteProvider {
    Osrm,
    Ors,
}

/// GeoJSON LineString geometry.
///
/// Coordinates are `[lon, lat]` pairs in traversal order, as GeoJSON
/// requires. A usable route geometry has at least two positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    #[serde(rename = "type")]
    pub geometry_type: String,

    pub coordinates: Vec<[f64; 2]>,
}

impl LineString {
    /// Build a LineString from `[lon, lat]` positions.
    pub fn new(coordinates: Vec<[f64; 2]>) -> Self {
        Self {
            geometry_type: "LineString".to_string(),
            coordinates,
        }
    }

    /// Number of positions in the geometry.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether the geometry holds no positions.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// A turn descriptor attached to a step by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    /// Maneuver type, e.g. "turn", "depart", "roundabout".
    #[serde(rename = "type")]
    pub kind: String,

    /// Direction refinement, e.g. "left", "slight right".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
}

impl Maneuver {
    pub fn new(kind: impl Into<String>, modifier: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            modifier,
        }
    }
}

/// One turn-by-turn instruction along a route, in traversal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    /// Human instruction text, provider-supplied or synthesized.
    pub instruction: String,

    /// Length of this step in meters.
    pub distance_meters: f64,

    /// Expected duration of this step in seconds.
    pub duration_seconds: f64,

    /// Road name, empty when the provider supplies none.
    pub road_name: String,

    /// The raw maneuver descriptor, when the provider sent one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maneuver: Option<Maneuver>,
}

/// The common internal route representation, independent of provider.
///
/// Built once per successful routing call and immutable afterwards.
/// `warnings` is non-empty exactly when a degraded fallback path produced
/// the route; `steps` may legitimately be empty even on success, since some
/// providers return no step detail for some profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRoute {
    pub provider: RouteProvider,

    pub profile: RouteProfile,

    pub geometry: LineString,

    pub distance_meters: f64,

    pub duration_seconds: f64,

    pub steps: Vec<RouteStep>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl NormalizedRoute {
    /// True when this route came from a degraded fallback path.
    pub fn is_fallback(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// The key identifying a single routing attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteQuery {
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub profile: RouteProfile,
}

impl RouteQuery {
    pub fn new(start: GeoPoint, end: GeoPoint, profile: RouteProfile) -> Self {
        Self {
            start,
            end,
            profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_route() -> NormalizedRoute {
        NormalizedRoute {
            provider: RouteProvider::Osrm,
            profile: RouteProfile::Car,
            geometry: LineString::new(vec![[22.28, 48.62], [22.29, 48.63]]),
            distance_meters: 1500.0,
            duration_seconds: 240.0,
            steps: vec![RouteStep {
                instruction: "Поверніть ліворуч".to_string(),
                distance_meters: 120.0,
                duration_seconds: 30.0,
                road_name: "вулиця Корзо".to_string(),
                maneuver: Some(Maneuver::new("turn", Some("left".to_string()))),
            }],
            warnings: Vec::new(),
        }
    }

    #[test]
    fn fallback_flag_tracks_warnings() {
        let mut route = sample_route();
        assert!(!route.is_fallback());

        route.warnings.push("degraded".to_string());
        assert!(route.is_fallback());
    }

    #[test]
    fn serializes_camel_case_and_omits_empty_warnings() {
        let route = sample_route();
        let json = serde_json::to_value(&route).unwrap();

        assert_eq!(json["provider"], "osrm");
        assert_eq!(json["profile"], "car");
        assert_eq!(json["distanceMeters"], 1500.0);
        assert_eq!(json["durationSeconds"], 240.0);
        assert_eq!(json["geometry"]["type"], "LineString");
        assert_eq!(json["steps"][0]["roadName"], "вулиця Корзо");
        assert_eq!(json["steps"][0]["maneuver"]["type"], "turn");
        assert!(json.get("warnings").is_none());
    }

    #[test]
    fn warnings_serialized_when_present() {
        let mut route = sample_route();
        route.warnings.push("Пішохідний профіль недоступний".to_string());
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["warnings"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn deserializes_without_warnings_field() {
        let json = serde_json::to_string(&sample_route()).unwrap();
        let back: NormalizedRoute = serde_json::from_str(&json).unwrap();
        assert!(back.warnings.is_empty());
        assert_eq!(back, sample_route());
    }

    #[test]
    fn maneuver_kind_uses_type_key() {
        let m = Maneuver::new("turn", Some("left".to_string()));
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["type"], "turn");
        assert_eq!(json["modifier"], "left");

        let bare = Maneuver::new("depart", None);
        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("modifier").is_none());
    }
}
