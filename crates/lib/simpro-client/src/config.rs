//! Client configuration.

/// Connection settings for the Simpro API.
///
/// Both values are captured once at construction and never change for the
/// lifetime of the client. An empty base URL or token is accepted here;
/// requests issued with them fail upstream and surface as [`crate::ClientError`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Simpro instance, e.g. `https://example.simprosuite.com`.
    pub base_url: String,
    /// Static bearer token sent with every request.
    pub access_token: String,
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }
}
