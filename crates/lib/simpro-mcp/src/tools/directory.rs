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

/// Parameters for listing employees.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetEmployeesParams {
    pub company_id: Option<i64>,
}

/// Parameters for fetching an employee by id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetEmployeeParams {
    pub company_id: i64,
    pub employee_id: i64,
}

/// Parameters for listing customers of a company.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetCustomersParams {
    pub company_id: i64,
}

/// Parameters for the customer-detail aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetCustomersOfCompanyParams {
    pub company_id: i64,
}

#[tool_router(router = tool_router_directory, vis = "pub")]
impl SimproMcp {
    #[tool(description = "Retrieve all companies from Simpro.")]
    async fn get_companies(&self) -> Result<CallToolResult, ErrorData> {
        helpers::list_or_empty("get_companies", self.client().get_companies().await)
    }

    #[tool(description = "Retrieve all employees of a specific company.")]
    async fn get_employees(
        &self,
        Parameters(params): Parameters<GetEmployeesParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::list_or_empty(
            "get_employees",
            self.client().get_employees(params.company_id).await,
        )
    }

    #[tool(description = "Retrieve details of a specific employee by id from a specific company.")]
    async fn get_employee(
        &self,
        Parameters(params): Parameters<GetEmployeeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::record_or_empty(
            "get_employee",
            self.client()
                .get_employee(params.company_id, params.employee_id)
                .await,
        )
    }

    #[tool(description = "Retrieve the customer list of a specific company.")]
    async fn get_customers(
        &self,
        Parameters(params): Parameters<GetCustomersParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::record_or_empty(
            "get_customers",
            self.client().get_customers(params.company_id).await,
        )
    }

    #[tool(
        description = "Retrieve full customer records of a specific company, resolving each customer's detail link."
    )]
    async fn get_customers_of_company(
        &self,
        Parameters(params): Parameters<GetCustomersOfCompanyParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::list_or_empty(
            "get_customers_of_company",
            self.client().get_customers_of_company(params.company_id).await,
        )
    }
}
