//! Main client for the Findata SDK.

use crate::api::*;
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::{AlphaVantageError, AlphaVantageResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the Alpha Vantage query API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct AlphaVantageClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl AlphaVantageClient {
    /// Create a new client builder.
    pub fn builder() -> AlphaVantageClientBuilder {
        AlphaVantageClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> AlphaVantageResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(AlphaVantageError::Config("api_key is required".to_string()));
        }

        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Get the quote API.
    pub fn quotes(&self) -> QuoteApi<'_> {
        QuoteApi::new(self)
    }

    /// Get the time series API.
    pub fn time_series(&self) -> TimeSeriesApi<'_> {
        TimeSeriesApi::new(self)
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl std::fmt::Debug for AlphaVantageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaVantageClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for creating an AlphaVantageClient.
pub struct AlphaVantageClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl AlphaVantageClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: None,
        }
    }

    /// Override the query endpoint (defaults to the public Alpha Vantage URL).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout. Requests wait indefinitely when unset.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> AlphaVantageResult<AlphaVantageClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| AlphaVantageError::Config("api_key is required".to_string()))?;

        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let config = ClientConfig {
            base_url,
            api_key,
            timeout: self.timeout,
        };

        AlphaVantageClient::from_config(config)
    }
}

impl Default for AlphaVantageClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutputSize;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AlphaVantageClient {
        AlphaVantageClient::builder()
            .base_url(format!("{}/query", server.uri()))
            .api_key("demo")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let client = AlphaVantageClient::builder().api_key("demo").build().unwrap();

        assert_eq!(client.config().base_url.as_str(), DEFAULT_BASE_URL);
        assert!(client.config().timeout.is_none());
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = AlphaVantageClient::builder().build();
        assert!(matches!(result, Err(AlphaVantageError::Config(_))));

        let result = AlphaVantageClient::builder().api_key("   ").build();
        assert!(matches!(result, Err(AlphaVantageError::Config(_))));
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let result = AlphaVantageClient::builder()
            .api_key("demo")
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(AlphaVantageError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_global_quote() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "GLOBAL_QUOTE"))
            .and(query_param("symbol", "AAPL"))
            .and(query_param("apikey", "demo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Global Quote": { "01. symbol": "AAPL", "05. price": "150.0000" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let quote = client_for(&server).quotes().global("AAPL").await.unwrap();
        assert_eq!(quote["Global Quote"]["05. price"], "150.0000");
    }

    #[tokio::test]
    async fn test_daily_sends_output_size() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "TIME_SERIES_DAILY"))
            .and(query_param("symbol", "IBM"))
            .and(query_param("outputsize", "full"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"daily": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let series = client_for(&server)
            .time_series()
            .daily("IBM", OutputSize::Full)
            .await
            .unwrap();
        assert_eq!(series, serde_json::json!({"daily": 1}));
    }

    #[tokio::test]
    async fn test_weekly_and_monthly_omit_output_size() {
        let server = MockServer::start().await;

        for function in ["TIME_SERIES_WEEKLY", "TIME_SERIES_MONTHLY"] {
            Mock::given(method("GET"))
                .and(path("/query"))
                .and(query_param("function", function))
                .and(query_param("symbol", "IBM"))
                .and(query_param_is_missing("outputsize"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "f": function })),
                )
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = client_for(&server);
        let weekly = client.time_series().weekly("IBM").await.unwrap();
        let monthly = client
            .time_series()
            .get("IBM", crate::types::Interval::Monthly, OutputSize::Full)
            .await
            .unwrap();

        assert_eq!(weekly["f"], "TIME_SERIES_WEEKLY");
        assert_eq!(monthly["f"], "TIME_SERIES_MONTHLY");
    }

    #[tokio::test]
    async fn test_symbol_is_sent_as_given() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "GLOBAL_QUOTE"))
            .and(query_param("symbol", " msft "))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).quotes().global(" msft ").await.unwrap();
    }

    #[tokio::test]
    async fn test_blank_symbol_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server).quotes().global("  ").await.unwrap_err();
        assert!(matches!(err, AlphaVantageError::InvalidInput(_)));
    }
}
