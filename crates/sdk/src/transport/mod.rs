//! Transport layer for the Findata SDK.

pub mod http;

pub use http::HttpTransport;
