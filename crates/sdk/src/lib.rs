//! # Findata SDK
//!
//! Typed client for the Alpha Vantage query API, limited to stock quotes and
//! daily/weekly/monthly price series.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use findata_sdk::{AlphaVantageClient, AlphaVantageResult, OutputSize};
//!
//! #[tokio::main]
//! async fn main() -> AlphaVantageResult<()> {
//!     let client = AlphaVantageClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let quote = client.quotes().global("AAPL").await?;
//!     println!("{}", quote);
//!
//!     let series = client.time_series().daily("AAPL", OutputSize::Compact).await?;
//!     println!("{}", series);
//!
//!     Ok(())
//! }
//! ```
//!
//! Payloads are returned as [`serde_json::Value`] exactly as the provider sent
//! them, key order included.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod market_data;
pub mod transport;
pub mod types;

pub use client::{AlphaVantageClient, AlphaVantageClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{AlphaVantageError, AlphaVantageResult, ErrorKind};
pub use market_data::MarketData;
pub use types::{Interval, OutputSize};
