use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FhError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be decoded as JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, with the API token removed.
        url: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that returned 404, with the API token removed.
        url: String,
    },

    /// The API rate limit was exceeded (HTTP 429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned 429, with the API token removed.
        url: String,
    },

    /// The server failed with a 5xx status.
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, with the API token removed.
        url: String,
    },

    /// No API token was configured.
    #[error("Finnhub API key is not defined (set FINNHUB_API_KEY)")]
    MissingApiKey,

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// News could not be assembled. The underlying cause is logged, not carried.
    #[error("failed to fetch news")]
    NewsUnavailable,
}

impl FhError {
    /// Maps a non-success HTTP status to the matching error variant.
    pub(crate) fn from_status(code: u16, url: String) -> Self {
        match code {
            404 => Self::NotFound { url },
            429 => Self::RateLimited { url },
            500..=599 => Self::ServerError { status: code, url },
            _ => Self::Status { status: code, url },
        }
    }
}
