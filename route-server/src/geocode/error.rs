//! Place search error types.

/// Errors from the place search HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("place search API error {status}")]
    Api { status: u16 },

    /// Failed to parse the response body
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Client construction failed
    #[error("invalid client configuration: {message}")]
    Config { message: String },
}
