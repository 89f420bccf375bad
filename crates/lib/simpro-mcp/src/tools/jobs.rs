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

/// Parameters for listing jobs of a company.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetJobsParams {
    pub company_id: i64,
}

/// Parameters for fetching a job by id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetJobParams {
    pub company_id: i64,
    pub job_id: i64,
}

/// Parameters for listing file attachments of a job.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetJobAttachmentsParams {
    pub company_id: i64,
    pub job_id: i64,
}

/// Parameters for the cost-to-complete operations report.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct JobsReportsOpsParams {
    pub company_id: i64,
    pub search: Option<String>,
    pub date: Option<String>,
}

/// Parameters for the cost-to-complete financial report.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct JobsReportsFinancialsParams {
    pub company_id: i64,
}

#[tool_router(router = tool_router_jobs, vis = "pub")]
impl SimproMcp {
    #[tool(description = "Retrieve a list of jobs of a specific company.")]
    async fn get_jobs(
        &self,
        Parameters(params): Parameters<GetJobsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::list_or_empty("get_jobs", self.client().get_jobs(params.company_id).await)
    }

    #[tool(description = "Retrieve details of a specific job by id.")]
    async fn get_job(
        &self,
        Parameters(params): Parameters<GetJobParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::record_or_empty(
            "get_job",
            self.client().get_job(params.company_id, params.job_id).await,
        )
    }

    #[tool(description = "Retrieve the file attachments of a specific job.")]
    async fn get_job_attachments(
        &self,
        Parameters(params): Parameters<GetJobAttachmentsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::list_or_empty(
            "get_job_attachments",
            self.client()
                .get_job_attachments(params.company_id, params.job_id)
                .await,
        )
    }

    #[tool(
        description = "Retrieve the jobs operations report of a specific company, optionally filtered by search text and date."
    )]
    async fn get_jobs_reports_ops(
        &self,
        Parameters(params): Parameters<JobsReportsOpsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::list_or_empty(
            "get_jobs_reports_ops",
            self.client()
                .get_jobs_reports_ops(params.company_id, params.search, params.date)
                .await,
        )
    }

    #[tool(description = "Retrieve the jobs financial report of a specific company.")]
    async fn get_jobs_reports_financials(
        &self,
        Parameters(params): Parameters<JobsReportsFinancialsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::list_or_empty(
            "get_jobs_reports_financials",
            self.client().get_jobs_reports_financials(params.company_id).await,
        )
    }
}
