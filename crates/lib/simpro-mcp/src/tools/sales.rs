use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::SimproMcp;
use crate::helpers;

/// Parameters for listing leads of a company.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetLeadsParams {
    pub company_id: i64,
}

/// Parameters for fetching a lead by id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetLeadParams {
    pub company_id: i64,
    pub lead_id: i64,
}

/// Parameters for listing quotes of a company.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetQuotesParams {
    pub company_id: i64,
    pub limit: Option<u64>,
}

/// Parameters for fetching a quote by id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetQuoteParams {
    pub company_id: i64,
    pub quote_id: i64,
}

#[tool_router(router = tool_router_sales, vis = "pub")]
impl SimproMcp {
    #[tool(description = "Retrieve a list of leads of a specific company.")]
    async fn get_leads(
        &self,
        Parameters(params): Parameters<GetLeadsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::list_or_empty("get_leads", self.client().get_leads(params.company_id).await)
    }

    #[tool(description = "Retrieve details of a specific lead by id.")]
    async fn get_lead(
        &self,
        Parameters(params): Parameters<GetLeadParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::record_or_empty(
            "get_lead",
            self.client().get_lead(params.company_id, params.lead_id).await,
        )
    }

    #[tool(description = "Retrieve a list of quotes of a specific company, optionally capped at `limit` records.")]
    async fn get_quotes(
        &self,
        Parameters(params): Parameters<GetQuotesParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::list_or_empty(
            "get_quotes",
            self.client().get_quotes(params.company_id, params.limit).await,
        )
    }

    #[tool(description = "Retrieve details of a specific quote by id.")]
    async fn get_quote(
        &self,
        Parameters(params): Parameters<GetQuoteParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::record_or_empty(
            "get_quote",
            self.client().get_quote(params.company_id, params.quote_id).await,
        )
    }
}
