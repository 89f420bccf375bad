//! Daemon entry point for the Simpro MCP server.
//!
//! Loads configuration from the environment, builds the Simpro API client,
//! and serves the MCP protocol over streamable HTTP (or stdio with
//! `--stdio`).

mod config;

use std::sync::Arc;

use simpro_client::{ClientConfig, SimproClient};
use simpro_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::info;

use crate::config::DaemonConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "simpro_mcpd=info,simpro_mcp=info,simpro_client=info".into()),
        )
        .init();

    let config = DaemonConfig::from_args();
    let client = SimproClient::new(ClientConfig::new(
        config.base_url.clone(),
        config.access_token.clone(),
    ))?;
    let client = Arc::new(client);

    if config.enable_stdio {
        serve_stdio(client).await?;
        return Ok(());
    }

    info!(addr = %config.mcp_http_addr, "serving MCP over streamable HTTP");
    serve_streamable_http(client, McpHttpServerConfig::new(config.mcp_http_addr)).await?;
    Ok(())
}
