// Server configuration read from the environment

use anyhow::{bail, Context, Result};
use findata_sdk::AlphaVantageClient;
use std::time::Duration;

pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";
pub const BASE_URL_ENV: &str = "ALPHA_VANTAGE_BASE_URL";
pub const TIMEOUT_ENV: &str = "ALPHA_VANTAGE_TIMEOUT_SECS";

/// Everything the server needs, resolved once at startup.
#[derive(Clone)]
pub struct ServerConfig {
    pub api_key: String,
    /// Provider endpoint override
    pub base_url: Option<String>,
    /// Outbound request timeout; unset means wait indefinitely
    pub timeout: Option<Duration>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = match lookup(API_KEY_ENV) {
            Some(key) if !key.trim().is_empty() => key,
            _ => bail!("{} environment variable not set.", API_KEY_ENV),
        };

        let base_url = lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty());

        let timeout = match lookup(TIMEOUT_ENV).filter(|secs| !secs.trim().is_empty()) {
            Some(secs) => {
                let secs: u64 = secs
                    .trim()
                    .parse()
                    .with_context(|| format!("{} must be a whole number of seconds", TIMEOUT_ENV))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }

    /// Construct the provider client described by this config
    pub fn build_client(&self) -> Result<AlphaVantageClient> {
        let mut builder = AlphaVantageClient::builder().api_key(self.api_key.clone());

        if let Some(ref base_url) = self.base_url {
            builder = builder.base_url(base_url.clone());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().context("Failed to create Alpha Vantage client")
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
