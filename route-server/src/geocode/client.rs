//! Nominatim place search client.
//!
//! All queries are restricted to the city viewbox with `bounded=1`, so
//! results never wander outside Uzhhorod no matter what the query says.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use super::error::GeocodeError;
use super::types::{GeocodingResult, NominatimPlace, Poi, PoiCategory};

/// Default public Nominatim instance.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// User-Agent identifying this application, as Nominatim's policy requires.
const DEFAULT_USER_AGENT: &str = "UzhRoutePlanner/1.0";

/// Uzhhorod bounding box in Nominatim order: west,north,east,south.
const CITY_VIEWBOX: &str = "22.20,48.68,22.38,48.55";

/// Hard cap on results per request.
const MAX_LIMIT: usize = 50;

/// Configuration for the place search client.
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Base URL of the search service.
    pub base_url: String,
    /// User-Agent header value.
    pub user_agent: String,
    /// Bounding box restricting all results.
    pub viewbox: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl NominatimConfig {
    /// Create a config for the public instance with the city viewbox.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            viewbox: CITY_VIEWBOX.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Nominatim API client.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
    viewbox: String,
}

impl NominatimClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();
        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| GeocodeError::Config {
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
            viewbox: config.viewbox,
        })
    }

    /// Free-text place search, most-relevant first.
    ///
    /// Unlike the directions adapters this propagates errors; the geocode
    /// session and the web layer decide how to degrade.
    pub async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<GeocodingResult>, GeocodeError> {
        let places = self
            .fetch(&[
                ("q", query),
                ("format", "jsonv2"),
                ("limit", &limit.min(MAX_LIMIT).to_string()),
                ("addressdetails", "1"),
                ("bounded", "1"),
                ("viewbox", &self.viewbox),
                ("accept-language", "uk,en"),
            ])
            .await?;

        Ok(places
            .into_iter()
            .filter_map(GeocodingResult::from_place)
            .collect())
    }

    /// Category search for points of interest inside the viewbox.
    pub async fn poi_search(
        &self,
        category: PoiCategory,
        limit: usize,
    ) -> Result<Vec<Poi>, GeocodeError> {
        let places = self
            .fetch(&[
                ("q", category.search_query()),
                ("format", "jsonv2"),
                ("limit", &limit.min(MAX_LIMIT).to_string()),
                ("addressdetails", "1"),
                ("namedetails", "1"),
                ("extratags", "1"),
                ("bounded", "1"),
                ("viewbox", &self.viewbox),
                ("accept-language", "uk"),
            ])
            .await?;

        Ok(places
            .into_iter()
            .filter_map(|place| Poi::from_place(place, category))
            .collect())
    }

    async fn fetch(&self, params: &[(&str, &str)]) -> Result<Vec<NominatimPlace>, GeocodeError> {
        let url = format!("{}/search", self.base_url);

        let response = self.http.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = NominatimConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.viewbox, CITY_VIEWBOX);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        let client = NominatimClient::new(NominatimConfig::new());
        assert!(client.is_ok());
    }
}
