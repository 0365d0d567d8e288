//! Error types for the Findata SDK.

use serde_json::Value;
use std::fmt;

/// Result type for SDK operations.
pub type AlphaVantageResult<T> = Result<T, AlphaVantageError>;

/// Coarse classification of a failure, independent of where it was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    Network,
    /// The provider rejected the API key.
    Auth,
    /// The request was malformed or named something the provider does not know.
    Validation,
    /// The provider throttled the request.
    RateLimited,
    /// Anything else, including undecodable responses.
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Auth => "auth",
            Self::Validation => "validation",
            Self::RateLimited => "rate_limited",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error types that can occur when talking to Alpha Vantage.
#[derive(Debug, thiserror::Error)]
pub enum AlphaVantageError {
    /// HTTP request failed. The request URL is stripped, since it carries the API key.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Provider answered with a non-success status code.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Provider rejected the query (`"Error Message"` in the payload).
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider rejected the API key.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Provider throttled the request (`"Note"` or `"Information"` in the payload).
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Interval outside of daily/weekly/monthly.
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// Output size outside of compact/full.
    #[error("Invalid outputsize: {0}")]
    InvalidOutputSize(String),

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl AlphaVantageError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(e) if e.is_decode() => ErrorKind::Unknown,
            Self::Http(_) => ErrorKind::Network,
            Self::Api { status, .. } => match *status {
                401 | 403 => ErrorKind::Auth,
                429 => ErrorKind::RateLimited,
                _ => ErrorKind::Unknown,
            },
            Self::Provider(_)
            | Self::InvalidInterval(_)
            | Self::InvalidOutputSize(_)
            | Self::InvalidInput(_) => ErrorKind::Validation,
            Self::Authentication(_) => ErrorKind::Auth,
            Self::RateLimited(_) => ErrorKind::RateLimited,
            Self::Config(_) | Self::Json(_) | Self::InvalidUrl(_) => ErrorKind::Unknown,
        }
    }

    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        // Alpha Vantage error bodies are usually JSON with a diagnostic key
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| diagnostic_message(&value).map(|(_, m)| m.to_string()))
            .unwrap_or_else(|| body.trim().to_string());

        Self::Api { status, message }
    }

    /// Inspect a successfully decoded payload for an in-band provider error.
    ///
    /// Alpha Vantage reports most failures with HTTP 200 and a single
    /// diagnostic key instead of the requested data.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let (key, message) = diagnostic_message(payload)?;
        let message = message.to_string();

        Some(match key {
            "Error Message" => Self::Provider(message),
            "Information" if mentions_api_key(&message) => Self::Authentication(message),
            _ => Self::RateLimited(message),
        })
    }
}

impl From<reqwest::Error> for AlphaVantageError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

const DIAGNOSTIC_KEYS: [&str; 3] = ["Error Message", "Information", "Note"];

fn diagnostic_message(payload: &Value) -> Option<(&'static str, &str)> {
    let object = payload.as_object()?;
    DIAGNOSTIC_KEYS
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str).map(|m| (*key, m)))
}

fn mentions_api_key(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("apikey") || lower.contains("api key")
}
