//! HTTP transport layer for the Findata SDK.

use crate::config::ClientConfig;
use crate::error::{AlphaVantageError, AlphaVantageResult};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for making provider queries.
///
/// Every call issues exactly one GET against the configured endpoint.
/// Nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> AlphaVantageResult<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            "findata-sdk/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Execute a query and return the decoded payload untouched.
    ///
    /// `params` must not contain `apikey`; it is appended from the config.
    pub async fn query(&self, params: &[(&str, &str)]) -> AlphaVantageResult<Value> {
        let function = params
            .iter()
            .find(|(name, _)| *name == "function")
            .map(|(_, value)| *value)
            .unwrap_or("<none>");
        debug!(url = %self.config.base_url, function, "GET request");

        let response = self
            .client
            .get(self.config.base_url.clone())
            .query(params)
            .query(&[("apikey", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AlphaVantageError::from_response(status.as_u16(), &body));
        }

        let payload: Value = serde_json::from_str(&body)?;
        debug!(function, bytes = body.len(), "Received response");

        if let Some(err) = AlphaVantageError::from_payload(&payload) {
            return Err(err);
        }

        Ok(payload)
    }
}
