//! OSRM-compatible directions HTTP client.
//!
//! One client wraps one base URL; the pedestrian fallback chain constructs
//! a second client pointed at a walking-capable server. Profile names are
//! passed per call because the same server may answer to "walking", "foot"
//! or only "driving".

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::domain::GeoPoint;

use super::error::OsrmError;
use super::types::{OsrmResponse, OsrmRoute};

/// Default public OSRM demo server.
const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// User-Agent sent with every request, as the public servers request.
const DEFAULT_USER_AGENT: &str = "UzhRoutePlanner/1.0";

/// Configuration for the OSRM client.
#[derive(Debug, Clone)]
pub struct OsrmConfig {
    /// Base URL of the directions server.
    pub base_url: String,
    /// User-Agent header value.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl OsrmConfig {
    /// Create a config pointing at the public demo server.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (self-hosted or walking-capable server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// OSRM directions API client.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
}

impl OsrmClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OsrmConfig) -> Result<Self, OsrmError> {
        let mut headers = HeaderMap::new();
        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| OsrmError::Config {
                message: "invalid User-Agent value".to_string(),
            })?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Try to fetch a route for the given provider profile name.
    ///
    /// Returns the best raw route candidate, or `None` on any failure:
    /// network trouble, a non-success HTTP status, a response code other
    /// than `"Ok"`, an empty route list, or a geometry too short to draw.
    /// Failures are logged and swallowed; a fallback chain iterates over
    /// calls like this one and must never be aborted by a single provider.
    pub async fn try_route(
        &self,
        profile: &str,
        start: GeoPoint,
        end: GeoPoint,
    ) -> Option<OsrmRoute> {
        match self.fetch_route(profile, start, end).await {
            Ok(route) => route,
            Err(e) => {
                debug!(profile, error = %e, "directions request failed");
                None
            }
        }
    }

    /// Transport-level fetch: `Err` for network/parse trouble, `Ok(None)`
    /// when the server answered but produced no usable route.
    async fn fetch_route(
        &self,
        profile: &str,
        start: GeoPoint,
        end: GeoPoint,
    ) -> Result<Option<OsrmRoute>, OsrmError> {
        // OSRM wants (lon,lat) pairs separated by semicolons.
        let url = format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base_url, profile, start.lon, start.lat, end.lon, end.lat
        );

        let response = self
            .http
            .get(&url)
            .query(&[
                ("overview", "full"),
                ("geometries", "geojson"),
                ("steps", "true"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OsrmError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: OsrmResponse = serde_json::from_str(&body).map_err(|e| OsrmError::Json {
            message: e.to_string(),
        })?;

        if parsed.code != "Ok" {
            debug!(profile, code = %parsed.code, "directions server rejected request");
            return Ok(None);
        }

        let Some(route) = parsed.routes.and_then(|mut routes| {
            if routes.is_empty() {
                None
            } else {
                Some(routes.remove(0))
            }
        }) else {
            return Ok(None);
        };

        // A drawable route needs at least two positions.
        if route.geometry.coordinates.len() < 2 {
            debug!(profile, "discarding route with degenerate geometry");
            return Ok(None);
        }

        Ok(Some(route))
    }
}
