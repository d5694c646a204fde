//! OpenRouteService client error types.

/// Errors from the ORS HTTP client. Internal to the adapter; callers see
/// `Option` (see [`super::OrsClient::try_walking`]).
#[derive(Debug, thiserror::Error)]
pub enum OrsError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("ORS API error {status}")]
    Api { status: u16 },

    /// Failed to parse the response body
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
