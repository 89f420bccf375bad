use clap::{Parser, builder::BoolishValueParser};
use std::net::SocketAddr;

const DEFAULT_MCP_HTTP_ADDR: &str = "0.0.0.0:8080";

#[derive(Parser, Debug)]
#[command(name = "simpro-mcpd", version, about = "Simpro MCP daemon.")]
struct CliArgs {
    /// Base URL of the Simpro instance. Not validated up front; requests
    /// issued without it fail at call time.
    #[arg(long, env = "SIMPRO_BASE_URL", default_value = "")]
    base_url: String,

    /// Static bearer token for the Simpro API.
    #[arg(long, env = "SIMPRO_ACCESS_TOKEN", default_value = "", hide_env_values = true)]
    access_token: String,

    #[arg(long, env = "SIMPRO_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(
        long = "stdio",
        env = "SIMPRO_ENABLE_STDIO",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone)]
pub struct DaemonConfig {
    pub base_url: String,
    pub access_token: String,
    pub mcp_http_addr: SocketAddr,
    pub enable_stdio: bool,
}

impl DaemonConfig {
    pub fn from_args() -> Self {
        Self::from(CliArgs::parse())
    }
}

impl From<CliArgs> for DaemonConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            base_url: args.base_url,
            access_token: args.access_token,
            mcp_http_addr: args.mcp_http_addr,
            enable_stdio: args.enable_stdio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_http_on_all_interfaces() {
        let args = CliArgs::parse_from(["simpro-mcpd"]);
        let config = DaemonConfig::from(args);

        assert_eq!(config.mcp_http_addr, DEFAULT_MCP_HTTP_ADDR.parse().unwrap());
        assert!(!config.enable_stdio);
    }

    #[test]
    fn missing_credentials_are_accepted() {
        let args = CliArgs::parse_from(["simpro-mcpd"]);
        let config = DaemonConfig::from(args);

        // Absent settings surface later as failed requests, not at startup.
        assert!(config.base_url.is_empty());
        assert!(config.access_token.is_empty());
    }
}
