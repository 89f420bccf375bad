//! MCP tool modules.
//!
//! Tools are grouped by domain: company/employee/customer directory lookups,
//! jobs and job reports, and sales records (leads and quotes).

pub mod directory;
pub mod jobs;
pub mod sales;
