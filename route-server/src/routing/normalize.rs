//! Conversion of raw provider routes into the common representation.
//!
//! This is the single place where provider response shapes turn into
//! [`NormalizedRoute`]. Adapters hand over their raw route tagged by
//! provider; nothing downstream ever sees an OSRM leg or an ORS segment.

use crate::domain::{
    LineString, Maneuver, NormalizedRoute, RouteProfile, RouteProvider, RouteStep,
};
use crate::ors::OrsRoute;
use crate::osrm::OsrmRoute;

use super::maneuver::maneuver_text;

/// A raw successful route from one provider, tagged by shape.
#[derive(Debug, Clone)]
pub enum RouteCandidate {
    Osrm(OsrmRoute),
    Ors(OrsRoute),
}

impl RouteCandidate {
    /// Which backend produced this candidate.
    pub fn provider(&self) -> RouteProvider {
        match self {
            RouteCandidate::Osrm(_) => RouteProvider::Osrm,
            RouteCandidate::Ors(_) => RouteProvider::Ors,
        }
    }
}

/// Build the provider-independent route.
///
/// Steps from every leg (or segment) are flattened into one traversal-order
/// sequence. Each step's instruction is the provider's text when it ships
/// one, otherwise it is synthesized from the maneuver descriptor. Absent
/// distances and durations become 0. `warnings` is attached as given; an
/// empty vector marks a non-degraded result.
pub fn normalize(
    candidate: RouteCandidate,
    profile: RouteProfile,
    warnings: Vec<String>,
) -> NormalizedRoute {
    let provider = candidate.provider();
    match candidate {
        RouteCandidate::Osrm(route) => normalize_osrm(route, provider, profile, warnings),
        RouteCandidate::Ors(route) => normalize_ors(route, provider, profile, warnings),
    }
}

fn normalize_osrm(
    route: OsrmRoute,
    provider: RouteProvider,
    profile: RouteProfile,
    warnings: Vec<String>,
) -> NormalizedRoute {
    let mut steps = Vec::new();
    for leg in route.legs {
        for step in leg.steps {
            let maneuver = step
                .maneuver
                .map(|m| Maneuver::new(m.kind, m.modifier));
            steps.push(RouteStep {
                // OSRM sends no instruction text; synthesize it.
                instruction: maneuver_text(maneuver.as_ref()).to_string(),
                distance_meters: step.distance.unwrap_or(0.0),
                duration_seconds: step.duration.unwrap_or(0.0),
                road_name: step.name.unwrap_or_default(),
                maneuver,
            });
        }
    }

    NormalizedRoute {
        provider,
        profile,
        geometry: LineString::new(route.geometry.coordinates),
        distance_meters: route.distance.unwrap_or(0.0),
        duration_seconds: route.duration.unwrap_or(0.0),
        steps,
        warnings,
    }
}

fn normalize_ors(
    route: OrsRoute,
    provider: RouteProvider,
    profile: RouteProfile,
    warnings: Vec<String>,
) -> NormalizedRoute {
    let mut steps = Vec::new();
    for segment in route.properties.segments {
        for step in segment.steps {
            // ORS describes maneuvers with a numeric instruction type.
            let maneuver = step
                .kind
                .map(|k| Maneuver::new(k.to_string(), None));
            let instruction = match step.instruction.filter(|text| !text.is_empty()) {
                Some(text) => text,
                None => maneuver_text(maneuver.as_ref()).to_string(),
            };
            steps.push(RouteStep {
                instruction,
                distance_meters: step.distance.unwrap_or(0.0),
                duration_seconds: step.duration.unwrap_or(0.0),
                road_name: step.name.unwrap_or_default(),
                maneuver,
            });
        }
    }

    NormalizedRoute {
        provider,
        profile,
        geometry: LineString::new(route.geometry.coordinates),
        distance_meters: route.properties.summary.distance.unwrap_or(0.0),
        duration_seconds: route.properties.summary.duration.unwrap_or(0.0),
        steps,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::osrm::{OsrmGeometry, OsrmLeg, OsrmManeuver, OsrmStep};

    fn osrm_step(name: &str, kind: &str, modifier: Option<&str>, distance: f64) -> OsrmStep {
        OsrmStep {
            distance: Some(distance),
            duration: Some(distance / 10.0),
            name: Some(name.to_string()),
            maneuver: Some(OsrmManeuver {
                kind: kind.to_string(),
                modifier: modifier.map(str::to_string),
            }),
        }
    }

    fn osrm_route(legs: Vec<OsrmLeg>) -> OsrmRoute {
        OsrmRoute {
            geometry: OsrmGeometry {
                coordinates: vec![[22.28, 48.62], [22.29, 48.61]],
            },
            distance: Some(1200.0),
            duration: Some(240.0),
            legs,
        }
    }

    #[test]
    fn flattens_legs_in_order() {
        let route = osrm_route(vec![
            OsrmLeg {
                steps: vec![
                    osrm_step("вулиця Корзо", "depart", None, 100.0),
                    osrm_step("", "turn", Some("left"), 200.0),
                ],
            },
            OsrmLeg {
                steps: vec![osrm_step("набережна Незалежності", "arrive", None, 50.0)],
            },
        ]);

        let normalized = normalize(
            RouteCandidate::Osrm(route),
            RouteProfile::Car,
            Vec::new(),
        );

        assert_eq!(normalized.provider, RouteProvider::Osrm);
        assert_eq!(normalized.steps.len(), 3);
        assert_eq!(normalized.steps[0].instruction, "Почніть рух");
        assert_eq!(normalized.steps[1].instruction, "Поверніть ліворуч");
        assert_eq!(normalized.steps[2].instruction, "Прибуття");
        assert_eq!(normalized.steps[2].road_name, "набережна Незалежності");
    }

    #[test]
    fn missing_aggregates_default_to_zero() {
        let route = OsrmRoute {
            geometry: OsrmGeometry {
                coordinates: vec![[22.28, 48.62], [22.29, 48.61]],
            },
            distance: None,
            duration: None,
            legs: vec![OsrmLeg {
                steps: vec![OsrmStep {
                    distance: None,
                    duration: None,
                    name: None,
                    maneuver: None,
                }],
            }],
        };

        let normalized = normalize(
            RouteCandidate::Osrm(route),
            RouteProfile::Car,
            Vec::new(),
        );

        assert_eq!(normalized.distance_meters, 0.0);
        assert_eq!(normalized.duration_seconds, 0.0);
        assert_eq!(normalized.steps[0].distance_meters, 0.0);
        assert_eq!(normalized.steps[0].road_name, "");
        assert_eq!(normalized.steps[0].instruction, "Продовжуйте");
    }

    #[test]
    fn empty_steps_is_a_valid_result() {
        let normalized = normalize(
            RouteCandidate::Osrm(osrm_route(vec![OsrmLeg { steps: Vec::new() }])),
            RouteProfile::Walk,
            Vec::new(),
        );
        assert!(normalized.steps.is_empty());
        assert!(!normalized.is_fallback());
    }

    #[test]
    fn warnings_mark_fallback_results() {
        let normalized = normalize(
            RouteCandidate::Osrm(osrm_route(Vec::new())),
            RouteProfile::Walk,
            vec!["degraded".to_string()],
        );
        assert!(normalized.is_fallback());
        assert_eq!(normalized.warnings, vec!["degraded".to_string()]);
    }

    #[test]
    fn ors_candidate_keeps_provider_text() {
        let json = r#"{
            "geometry": {"coordinates": [[22.28, 48.62], [22.29, 48.61]]},
            "properties": {
                "summary": {"distance": 950.0, "duration": 684.0},
                "segments": [
                    {
                        "steps": [
                            {"instruction": "Рушайте на південь", "name": "-", "type": 11, "distance": 60.0, "duration": 43.2},
                            {"name": "вулиця Волошина", "type": 0, "distance": 100.0, "duration": 72.0}
                        ]
                    }
                ]
            }
        }"#;
        let route: OrsRoute = serde_json::from_str(json).unwrap();

        let normalized = normalize(RouteCandidate::Ors(route), RouteProfile::Walk, Vec::new());

        assert_eq!(normalized.provider, RouteProvider::Ors);
        assert_eq!(normalized.distance_meters, 950.0);
        assert_eq!(normalized.steps.len(), 2);
        // Provider text wins when present.
        assert_eq!(normalized.steps[0].instruction, "Рушайте на південь");
        assert_eq!(normalized.steps[0].maneuver.as_ref().unwrap().kind, "11");
        // No text from the provider: synthesized (numeric kinds have no
        // table entry, so the generic text applies).
        assert_eq!(normalized.steps[1].instruction, "Продовжуйте");
    }
}
