//! Provider fallback chain.
//!
//! One entry point, [`RoutePlanner::route`], hides the mess of public
//! routing servers behind a fixed priority order. Car routing is a single
//! attempt; pedestrian routing walks a chain of profile names and backends
//! until something answers, degrading in the worst case to a driving route
//! re-timed at walking pace with an advisory warning attached.

use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::debug;

use crate::domain::{GeoPoint, NormalizedRoute, RouteProfile, RouteQuery};
use crate::ors::{OrsClient, OrsRoute};
use crate::osrm::{OsrmClient, OsrmRoute};

use super::normalize::{RouteCandidate, normalize};

/// Fixed pedestrian speed used to synthesize walking durations, in m/s
/// (≈5 km/h).
const WALKING_SPEED_MPS: f64 = 1.3889;

/// Advisory attached when a driving route stands in for a pedestrian one.
const WALK_FALLBACK_WARNING: &str =
    "Пішохідний профіль недоступний. Показано альтернативний маршрут.";

/// Profile names a pedestrian-labeled server might answer to, in priority
/// order. Some expose only "foot"; some only answer to "driving".
const PEDESTRIAN_PROFILES: [&str; 3] = ["walking", "foot", "driving"];

/// Final routing failure, produced only after the whole chain is exhausted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Every provider attempt failed.
    #[error("no route found between these points")]
    NoRoute,
}

/// An OSRM-shaped directions backend, one call per profile name.
///
/// `None` is a soft failure; implementations must not panic or propagate
/// provider trouble.
pub trait DirectionsApi: Send + Sync {
    fn try_route<'a>(
        &'a self,
        profile: &'a str,
        start: GeoPoint,
        end: GeoPoint,
    ) -> BoxFuture<'a, Option<OsrmRoute>>;
}

impl DirectionsApi for OsrmClient {
    fn try_route<'a>(
        &'a self,
        profile: &'a str,
        start: GeoPoint,
        end: GeoPoint,
    ) -> BoxFuture<'a, Option<OsrmRoute>> {
        Box::pin(OsrmClient::try_route(self, profile, start, end))
    }
}

/// A walking-capable alternate backend.
pub trait WalkingApi: Send + Sync {
    fn try_walking(&self, start: GeoPoint, end: GeoPoint) -> BoxFuture<'_, Option<OrsRoute>>;
}

impl WalkingApi for OrsClient {
    fn try_walking(&self, start: GeoPoint, end: GeoPoint) -> BoxFuture<'_, Option<OrsRoute>> {
        Box::pin(OrsClient::try_walking(self, start, end))
    }
}

/// Routing orchestrator over the configured backends.
pub struct RoutePlanner {
    /// Car-profile directions server.
    car: Arc<dyn DirectionsApi>,

    /// Pedestrian-capable directions server (may be the same server).
    pedestrian: Arc<dyn DirectionsApi>,

    /// Alternate walking backend, present only when a key is configured.
    walking_fallback: Option<Arc<dyn WalkingApi>>,
}

impl RoutePlanner {
    /// Create a planner over the given backends.
    pub fn new(
        car: Arc<dyn DirectionsApi>,
        pedestrian: Arc<dyn DirectionsApi>,
        walking_fallback: Option<Arc<dyn WalkingApi>>,
    ) -> Self {
        Self {
            car,
            pedestrian,
            walking_fallback,
        }
    }

    /// Compute one route, trying providers in priority order.
    ///
    /// Individual provider failures never abort the chain; the only error
    /// this returns is [`RouteError::NoRoute`] once every attempt failed.
    pub async fn route(&self, query: &RouteQuery) -> Result<NormalizedRoute, RouteError> {
        match query.profile {
            RouteProfile::Car => self.route_car(query).await,
            RouteProfile::Walk => self.route_walk(query).await,
        }
    }

    async fn route_car(&self, query: &RouteQuery) -> Result<NormalizedRoute, RouteError> {
        let Some(route) = self.car.try_route("driving", query.start, query.end).await else {
            return Err(RouteError::NoRoute);
        };
        Ok(normalize(
            RouteCandidate::Osrm(route),
            RouteProfile::Car,
            Vec::new(),
        ))
    }

    async fn route_walk(&self, query: &RouteQuery) -> Result<NormalizedRoute, RouteError> {
        for profile in PEDESTRIAN_PROFILES {
            if let Some(route) = self
                .pedestrian
                .try_route(profile, query.start, query.end)
                .await
            {
                return Ok(normalize(
                    RouteCandidate::Osrm(route),
                    RouteProfile::Walk,
                    Vec::new(),
                ));
            }
        }

        if let Some(ors) = &self.walking_fallback {
            if let Some(route) = ors.try_walking(query.start, query.end).await {
                return Ok(normalize(
                    RouteCandidate::Ors(route),
                    RouteProfile::Walk,
                    Vec::new(),
                ));
            }
        }

        // Last resort: a driving route re-timed at walking pace.
        if let Some(route) = self.car.try_route("driving", query.start, query.end).await {
            debug!("pedestrian profile unavailable, using driving fallback");
            let mut normalized = normalize(
                RouteCandidate::Osrm(route),
                RouteProfile::Walk,
                vec![WALK_FALLBACK_WARNING.to_string()],
            );
            normalized.duration_seconds =
                (normalized.distance_meters / WALKING_SPEED_MPS).round();
            return Ok(normalized);
        }

        Err(RouteError::NoRoute)
    }
}
