//! OpenRouteService directions client.
//!
//! The alternate walking-capable backend, used only when the OSRM
//! pedestrian attempts have all failed. Requires an API key; the key
//! travels as a query parameter, not a header.

use serde_json::json;
use tracing::debug;

use crate::domain::GeoPoint;

use super::error::OrsError;
use super::types::{OrsResponse, OrsRoute};

/// Default ORS endpoint.
const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// Configuration for the ORS client.
#[derive(Debug, Clone)]
pub struct OrsConfig {
    /// API key issued by openrouteservice.org.
    pub api_key: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl OrsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// OpenRouteService API client.
#[derive(Debug, Clone)]
pub struct OrsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OrsClient {
    /// Create a new ORS client.
    pub fn new(config: OrsConfig) -> Result<Self, OrsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Try to fetch a pedestrian route.
    ///
    /// Soft failure contract as for the OSRM adapter: any trouble returns
    /// `None` and is logged, never propagated.
    pub async fn try_walking(&self, start: GeoPoint, end: GeoPoint) -> Option<OrsRoute> {
        match self.fetch_walking(start, end).await {
            Ok(route) => route,
            Err(e) => {
                debug!(error = %e, "ORS request failed");
                None
            }
        }
    }

    async fn fetch_walking(
        &self,
        start: GeoPoint,
        end: GeoPoint,
    ) -> Result<Option<OrsRoute>, OrsError> {
        let url = format!(
            "{}/v2/directions/foot-walking?api_key={}",
            self.base_url, self.api_key
        );

        let body = json!({
            "coordinates": [start.lon_lat(), end.lon_lat()],
            "format": "geojson",
        });

        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrsError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: OrsResponse = serde_json::from_str(&body).map_err(|e| OrsError::Json {
            message: e.to_string(),
        })?;

        let Some(route) = parsed.features.into_iter().next() else {
            return Ok(None);
        };

        if route.geometry.coordinates.len() < 2 {
            debug!("discarding ORS route with degenerate geometry");
            return Ok(None);
        }

        Ok(Some(route))
    }
}
