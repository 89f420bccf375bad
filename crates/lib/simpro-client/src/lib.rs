//! Client for the Simpro business-management REST API.
//!
//! This crate owns request construction and JSON decoding for every Simpro
//! resource the MCP surface exposes: companies, employees, customers, jobs,
//! job reports, leads, and quotes. Payloads are passed through as opaque
//! `serde_json::Value` documents; the crate defines no schema for them.

mod client;
mod config;
mod error;

pub use client::SimproClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
