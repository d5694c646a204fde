//! OSRM route service response DTOs.
//!
//! These types map directly to the OSRM `/route/v1` JSON responses.
//! Numeric fields use `Option` because demo servers omit aggregates for
//! some profiles rather than sending zeros.

use serde::Deserialize;

/// Top-level response from `/route/v1/{profile}/{coordinates}`.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmResponse {
    /// Status code; `"Ok"` is the only success value.
    pub code: String,

    /// Route candidates, best first. Absent or empty on failure.
    pub routes: Option<Vec<OsrmRoute>>,
}

/// A single route candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmRoute {
    /// Full-overview GeoJSON geometry.
    pub geometry: OsrmGeometry,

    /// Total distance in meters.
    pub distance: Option<f64>,

    /// Total duration in seconds.
    pub duration: Option<f64>,

    /// One leg per via-point pair; two waypoints yield one leg.
    #[serde(default)]
    pub legs: Vec<OsrmLeg>,
}

/// GeoJSON LineString geometry as OSRM sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmGeometry {
    /// `[lon, lat]` positions in traversal order.
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}

/// A leg of a route, carrying its step detail.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmLeg {
    #[serde(default)]
    pub steps: Vec<OsrmStep>,
}

/// A single step within a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmStep {
    /// Step distance in meters.
    pub distance: Option<f64>,

    /// Step duration in seconds.
    pub duration: Option<f64>,

    /// Road name; empty or absent on unnamed ways.
    pub name: Option<String>,

    /// The maneuver starting this step.
    pub maneuver: Option<OsrmManeuver>,
}

/// Maneuver descriptor on a step.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmManeuver {
    /// Maneuver type, e.g. "turn", "depart", "arrive".
    #[serde(rename = "type")]
    pub kind: String,

    /// Direction refinement, e.g. "left", "slight right".
    pub modifier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_route_response() {
        let json = r#"{
            "code": "Ok",
            "routes": [
                {
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[22.2879, 48.6208], [22.2955, 48.6101]]
                    },
                    "distance": 1843.2,
                    "duration": 312.6,
                    "legs": [
                        {
                            "steps": [
                                {
                                    "distance": 120.0,
                                    "duration": 24.1,
                                    "name": "вулиця Корзо",
                                    "maneuver": {"type": "depart"}
                                },
                                {
                                    "distance": 310.5,
                                    "duration": 61.0,
                                    "name": "",
                                    "maneuver": {"type": "turn", "modifier": "left"}
                                }
                            ]
                        }
                    ]
                }
            ]
        }"#;

        let response: OsrmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, "Ok");

        let routes = response.routes.unwrap();
        assert_eq!(routes.len(), 1);

        let route = &routes[0];
        assert_eq!(route.geometry.coordinates.len(), 2);
        assert_eq!(route.distance, Some(1843.2));
        assert_eq!(route.legs.len(), 1);

        let steps = &route.legs[0].steps;
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].maneuver.as_ref().unwrap().kind, "depart");
        assert_eq!(
            steps[1].maneuver.as_ref().unwrap().modifier.as_deref(),
            Some("left")
        );
    }

    #[test]
    fn deserialize_error_response() {
        let json = r#"{"code": "NoRoute", "message": "Impossible route between points"}"#;
        let response: OsrmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, "NoRoute");
        assert!(response.routes.is_none());
    }

    #[test]
    fn deserialize_route_without_steps() {
        // Some servers answer without step detail when steps=false or the
        // profile has none to give.
        let json = r#"{
            "code": "Ok",
            "routes": [
                {
                    "geometry": {"coordinates": [[22.28, 48.62], [22.29, 48.61]]},
                    "distance": 900.0,
                    "duration": 120.0,
                    "legs": [{}]
                }
            ]
        }"#;

        let response: OsrmResponse = serde_json::from_str(json).unwrap();
        let route = &response.routes.unwrap()[0];
        assert!(route.legs[0].steps.is_empty());
    }
}
