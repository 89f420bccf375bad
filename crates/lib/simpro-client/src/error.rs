//! Error types for the Simpro client.

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// A failed upstream request.
///
/// Connection errors, timeouts, and non-2xx statuses all land here; callers
/// that follow the swallow-and-log contract treat every variant the same way
/// and substitute an empty value.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure: connection refused, DNS, timeout, or a body
    /// that did not decode as JSON.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {status} for {url}: {message}")]
    Status {
        status: u16,
        url: String,
        message: String,
    },

    /// The client could not be built or the request could not be formed.
    #[error("configuration error: {0}")]
    Config(String),
}
