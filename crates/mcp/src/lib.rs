// MCP (Model Context Protocol) server exposing stock market data tools
// to agent clients over stdio

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

#[cfg(test)]
mod testing;

pub use config::ServerConfig;
pub use dispatcher::Dispatcher;
pub use error::ToolError;
pub use server::McpServer;
