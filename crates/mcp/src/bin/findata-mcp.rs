// Standalone MCP server binary

use anyhow::Result;
use findata_mcp::{Dispatcher, McpServer, ServerConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Fail before serving anything if the credential is missing
    let config = ServerConfig::from_env()?;
    let client = config.build_client()?;

    tracing::info!(base_url = %client.config().base_url, "Findata MCP Server starting...");

    let dispatcher = Dispatcher::with_market_data(Arc::new(client));
    tracing::info!("Registered {} tools", dispatcher.list_tools().len());

    let server = McpServer::new(dispatcher);

    tokio::select! {
        result = server.start() => {
            result?;
        }
        _ = shutdown_signal() => {
            tracing::info!("Received shutdown signal, stopping MCP server");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
