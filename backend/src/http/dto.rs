//! Data Transfer Objects for the HTTP API.
//!
//! View-model DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    DashboardData, DatasetInfo, DatasetRole, DiscrepancyData, FilterState, PreviewData,
};

/// Request body for uploading a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDatasetRequest {
    /// Display name for the dataset
    pub name: String,
    /// Supplier- or customer-reported
    pub role: DatasetRole,
    /// Either a JSON array of records or a string holding JSON or CSV text
    pub payload: serde_json::Value,
}

/// Request body for building a standardization prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardizePromptRequest {
    /// Free-form input to be rewritten as records
    pub raw: String,
}

/// Prompt to forward to the text-generation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardizePromptResponse {
    pub prompt: String,
    pub truncated: bool,
}

/// Request body for storing a text-generation reply as a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardizedDatasetRequest {
    pub name: String,
    pub role: DatasetRole,
    /// Reply text, possibly wrapped in Markdown code fences
    pub response: String,
}

/// Dataset list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetListResponse {
    pub datasets: Vec<DatasetInfo>,
    pub total: usize,
}

/// Response for loading the built-in data sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultSourcesResponse {
    pub supplier: DatasetInfo,
    pub customer: DatasetInfo,
}

/// Query parameters for the preview endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PreviewQuery {
    /// Requested row count; clamped to the configured bounds
    #[serde(default)]
    pub rows: Option<usize>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository status
    pub repository: String,
}
