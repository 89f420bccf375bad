//! MCP server implementation for simpro-mcp.
//!
//! This crate wires the Simpro API client into rmcp tool handlers and
//! exposes the server runners for stdio and streamable HTTP transports.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use simpro_client::SimproClient;

/// Name reported by the liveness endpoint and server info.
pub const SERVICE_NAME: &str = "simpro-mcp";

const SERVER_INSTRUCTIONS: &str = r"simpro-mcp exposes read-only tools over the Simpro business-management API.

Workflow:
1. Call `get_companies` to discover company ids; every other tool is scoped
   to a `company_id`.
2. Directory lookups: `get_employees`, `get_employee`, `get_customers`,
   `get_customers_of_company` (follows each customer's self-link to return
   full records).
3. Job lookups: `get_jobs`, `get_job`, `get_job_attachments`, plus the
   cost-to-complete reports `get_jobs_reports_ops` (optional `search` and
   `date` filters) and `get_jobs_reports_financials`.
4. Sales lookups: `get_leads`, `get_lead`, `get_quotes` (optional `limit`),
   `get_quote`.

Notes:
- Records are returned exactly as the upstream API shapes them.
- A failed upstream request yields an empty list or empty record rather than
  an error; an empty result can mean either no data or an unreachable API.
- `health` returns `ok`.";

/// MCP server wrapper around the Simpro client and tool routers.
#[derive(Clone)]
pub struct SimproMcp {
    tool_router: ToolRouter<Self>,
    client: Arc<SimproClient>,
}

impl SimproMcp {
    /// Creates a new server owning the given client.
    #[must_use]
    pub fn new(client: SimproClient) -> Self {
        Self::with_client(Arc::new(client))
    }

    /// Creates a new server using a shared client handle.
    #[must_use]
    pub fn with_client(client: Arc<SimproClient>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_directory()
            + Self::tool_router_jobs()
            + Self::tool_router_sales();
        Self {
            tool_router,
            client,
        }
    }

    pub(crate) fn client(&self) -> &SimproClient {
        &self.client
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl SimproMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for SimproMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
