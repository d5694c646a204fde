//! OSRM client error types.

/// Errors from the OSRM HTTP client.
///
/// These never escape the adapter: [`super::OsrmClient::try_route`] collapses
/// them to `None` so a single provider failure can never abort a fallback
/// chain. The type exists so the transport path can use `?` internally and
/// so failures carry enough detail to log.
#[derive(Debug, thiserror::Error)]
pub enum OsrmError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("directions API error {status}")]
    Api { status: u16 },

    /// Failed to parse the response body
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Client construction failed
    #[error("invalid client configuration: {message}")]
    Config { message: String },
}
