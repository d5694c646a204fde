//! Client-side search orchestration.
//!
//! One `GeocodeSession` exists per application session and owns everything
//! the search box needs around the raw client: query normalization, the
//! coordinate-literal shortcut, city bias, a TTL response cache and
//! single-flight cancellation. The session never fails: every outcome,
//! including upstream errors and superseded requests, is an ordinary
//! (possibly empty) result list.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::BoxFuture;
use moka::future::Cache as MokaCache;
use tokio::task::AbortHandle;
use tracing::warn;

use crate::domain::GeoPoint;

use super::client::NominatimClient;
use super::error::GeocodeError;
use super::types::GeocodingResult;

/// How long a non-empty search result stays cached.
const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Maximum number of cached queries.
const CACHE_CAPACITY: u64 = 500;

/// Queries shorter than this never reach the network.
const MIN_QUERY_CHARS: usize = 2;

/// Result count requested per search.
const SEARCH_LIMIT: usize = 7;

/// City spellings that suppress the bias suffix.
const CITY_MARKERS: [&str; 2] = ["ужгород", "uzhhorod"];

/// Appended to queries that don't already mention the city.
const CITY_SUFFIX: &str = ", Ужгород";

/// A place search backend the session can call.
///
/// The returned future owns its inputs so the session can spawn it as an
/// independent task and abort it when a newer search supersedes it.
pub trait PlaceSearchApi: Send + Sync {
    fn search(
        &self,
        query: String,
        limit: usize,
    ) -> BoxFuture<'static, Result<Vec<GeocodingResult>, GeocodeError>>;
}

impl PlaceSearchApi for NominatimClient {
    fn search(
        &self,
        query: String,
        limit: usize,
    ) -> BoxFuture<'static, Result<Vec<GeocodingResult>, GeocodeError>> {
        let client = self.clone();
        Box::pin(async move { NominatimClient::search(&client, &query, limit).await })
    }
}

/// Search-box session state: cache plus the in-flight request handle.
pub struct GeocodeSession {
    api: Arc<dyn PlaceSearchApi>,
    cache: MokaCache<String, Arc<Vec<GeocodingResult>>>,
    active: Mutex<Option<AbortHandle>>,
}

impl GeocodeSession {
    /// Create a session over the given backend.
    pub fn new(api: Arc<dyn PlaceSearchApi>) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(CACHE_TTL)
            .max_capacity(CACHE_CAPACITY)
            .build();

        Self {
            api,
            cache,
            active: Mutex::new(None),
        }
    }

    /// Search for places matching a free-text query.
    ///
    /// Returns candidates most-relevant first. Degenerate queries resolve
    /// without touching the network: too-short input yields an empty list
    /// and a literal `lat,lon` pair yields a single synthetic result.
    /// Issuing a new search abandons the previous in-flight request, whose
    /// caller receives an empty list rather than an error.
    pub async fn search(&self, query: &str) -> Vec<GeocodingResult> {
        let normalized = normalize_query(query);
        if normalized.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        if let Some(point) = parse_coordinate_literal(&normalized) {
            return vec![synthetic_result(point)];
        }

        let cache_key = normalized.to_lowercase();
        if let Some(hit) = self.cache.get(&cache_key).await {
            return hit.as_ref().clone();
        }

        let biased = with_city_bias(&normalized);

        // One request in flight per session: abandon the previous one
        // before issuing ours.
        let task = {
            let mut active = self.active.lock().expect("geocode session lock poisoned");
            if let Some(previous) = active.take() {
                previous.abort();
            }
            let task = tokio::spawn(self.api.search(biased, SEARCH_LIMIT));
            *active = Some(task.abort_handle());
            task
        };

        let results = match task.await {
            Ok(Ok(results)) => results,
            Ok(Err(e)) => {
                warn!(error = %e, "place search failed");
                Vec::new()
            }
            // Aborted by a newer search; silence, not an error.
            Err(e) if e.is_cancelled() => Vec::new(),
            Err(e) => {
                warn!(error = %e, "place search task failed");
                Vec::new()
            }
        };

        // Empty answers are often transient service moods; caching them
        // would pin "not found" for the whole TTL.
        if !results.is_empty() {
            self.cache
                .insert(cache_key, Arc::new(results.clone()))
                .await;
        }

        results
    }
}

/// Trim and collapse internal whitespace.
fn normalize_query(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Append the city qualifier unless the query already names the city.
fn with_city_bias(query: &str) -> String {
    let lower = query.to_lowercase();
    if CITY_MARKERS.iter().any(|marker| lower.contains(marker)) {
        query.to_string()
    } else {
        format!("{query}{CITY_SUFFIX}")
    }
}

/// Recognize a typed-in `lat,lon` pair with both components in range.
fn parse_coordinate_literal(query: &str) -> Option<GeoPoint> {
    let compact: String = query.chars().filter(|c| !c.is_whitespace()).collect();
    let (lat, lon) = compact.split_once(',')?;
    let lat: f64 = lat.parse().ok()?;
    let lon: f64 = lon.parse().ok()?;
    GeoPoint::new(lat, lon).ok()
}

/// The synthetic candidate representing a typed-in coordinate pair.
fn synthetic_result(point: GeoPoint) -> GeocodingResult {
    GeocodingResult {
        place_id: String::new(),
        display_name: format!("{}, {}", point.lat, point.lon),
        lat: point.lat,
        lon: point.lon,
        kind: "coordinate".to_string(),
        address: None,
    }
}
