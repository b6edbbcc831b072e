use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Upstream no-data outcomes (an empty price series, an empty article list)
/// are not errors; they surface as empty `Ok` values.
#[derive(Debug, Error)]
pub enum BoardError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from an upstream provider was in an unexpected
    /// format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A request was configured with invalid parameters.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// An invalid date range was provided (start must be before end).
    #[error("invalid date range: start must be before end")]
    InvalidDates,

    /// The news API key was neither configured on the client nor present in
    /// the environment.
    #[error("news API key not configured (set it on the builder or via NEWS_API_KEY)")]
    MissingApiKey,
}
