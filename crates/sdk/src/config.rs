//! Configuration types for the Findata SDK.

use std::time::Duration;
use url::Url;

/// Default Alpha Vantage query endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Configuration for the Alpha Vantage client.
#[derive(Clone)]
pub struct ClientConfig {
    /// Query endpoint of the provider.
    pub base_url: Url,
    /// API key sent with every request.
    pub api_key: String,
    /// Request timeout. `None` lets a request wait indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a new configuration with the given endpoint and API key.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            timeout: None,
        }
    }
}

// Keep the API key out of logs and panic messages
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
