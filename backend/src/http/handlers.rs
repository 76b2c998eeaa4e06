//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the actual work.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateDatasetRequest, DatasetListResponse, DefaultSourcesResponse, HealthResponse,
    PreviewQuery, StandardizePromptRequest, StandardizePromptResponse,
    StandardizedDatasetRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    DashboardData, DatasetId, DatasetInfo, DatasetRole, DiscrepancyData, DistributionRecord,
    FilterState, PreviewData, TimeZoneRange,
};
use crate::db::services as db_services;
use crate::parsing::{
    parse_records, parse_records_json_str, parse_standardized_response,
    sources::DEFAULT_SOURCE_SIZE, StandardizePrompt,
};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Run CPU-bound work on the blocking pool.
async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))
}

fn validate_filter(spec: &FilterState) -> Result<(), AppError> {
    TimeZoneRange::new(spec.time_zone_range.lo, spec.time_zone_range.hi)
        .map(|_| ())
        .map_err(AppError::BadRequest)
}

/// Turn an upload payload into records.
fn parse_payload(payload: serde_json::Value) -> Result<Vec<DistributionRecord>, AppError> {
    match payload {
        serde_json::Value::String(text) => Ok(parse_records(&text)?),
        value @ serde_json::Value::Array(_) => {
            let text = serde_json::to_string(&value)
                .map_err(|e| AppError::BadRequest(format!("Invalid payload: {}", e)))?;
            Ok(parse_records_json_str(&text)?)
        }
        _ => Err(AppError::BadRequest(
            "payload must be a JSON array of records or a string of JSON/CSV text".to_string(),
        )),
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repository = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository,
    }))
}

// =============================================================================
// Datasets
// =============================================================================

/// GET /v1/datasets
pub async fn list_datasets(State(state): State<AppState>) -> HandlerResult<DatasetListResponse> {
    let datasets = db_services::list_datasets(state.repository.as_ref()).await?;
    let total = datasets.len();
    Ok(Json(DatasetListResponse { datasets, total }))
}

/// POST /v1/datasets
///
/// Parse an uploaded payload and store it as a dataset.
pub async fn create_dataset(
    State(state): State<AppState>,
    Json(request): Json<CreateDatasetRequest>,
) -> Result<(StatusCode, Json<DatasetInfo>), AppError> {
    let CreateDatasetRequest {
        name,
        role,
        payload,
    } = request;

    let records = run_blocking(move || parse_payload(payload)).await??;
    tracing::info!("Parsed {} records for dataset '{}'", records.len(), name);

    let info = db_services::store_dataset(state.repository.as_ref(), &name, role, records).await?;
    Ok((StatusCode::CREATED, Json(info)))
}

/// POST /v1/datasets/standardized
///
/// Store the records a text-generation service produced from free text.
pub async fn create_standardized_dataset(
    State(state): State<AppState>,
    Json(request): Json<StandardizedDatasetRequest>,
) -> Result<(StatusCode, Json<DatasetInfo>), AppError> {
    let StandardizedDatasetRequest {
        name,
        role,
        response,
    } = request;

    let records = run_blocking(move || parse_standardized_response(&response)).await??;
    tracing::info!(
        "Standardized reply yielded {} records for dataset '{}'",
        records.len(),
        name
    );

    let info = db_services::store_dataset(state.repository.as_ref(), &name, role, records).await?;
    Ok((StatusCode::CREATED, Json(info)))
}

/// POST /v1/standardize/prompt
pub async fn build_standardize_prompt(
    Json(request): Json<StandardizePromptRequest>,
) -> HandlerResult<StandardizePromptResponse> {
    let prompt = StandardizePrompt::from_raw(&request.raw);
    Ok(Json(StandardizePromptResponse {
        prompt: prompt.text,
        truncated: prompt.truncated,
    }))
}

/// POST /v1/datasets/default
///
/// Load the built-in supplier dataset and its simulated customer copy.
pub async fn load_default_datasets(
    State(state): State<AppState>,
) -> HandlerResult<DefaultSourcesResponse> {
    let (supplier, customer) =
        db_services::load_default_sources(state.repository.as_ref(), DEFAULT_SOURCE_SIZE).await?;
    Ok(Json(DefaultSourcesResponse { supplier, customer }))
}

/// GET /v1/datasets/{dataset_id}/preview
pub async fn get_preview(
    State(state): State<AppState>,
    Path(dataset_id): Path<i64>,
    Query(query): Query<PreviewQuery>,
) -> HandlerResult<PreviewData> {
    let dataset_id = DatasetId::new(dataset_id);
    let records = db_services::get_records(state.repository.as_ref(), dataset_id).await?;
    let limits = &state.config.limits;

    Ok(Json(services::compute_preview(
        &records,
        query.rows,
        limits.preview_default,
        limits.preview_min,
        limits.preview_max,
    )))
}

// =============================================================================
// Visualization Endpoints
// =============================================================================

/// POST /v1/datasets/{dataset_id}/dashboard
///
/// Filter a dataset and compute every dashboard view from the result.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(dataset_id): Path<i64>,
    Json(spec): Json<FilterState>,
) -> HandlerResult<DashboardData> {
    validate_filter(&spec)?;
    let dataset_id = DatasetId::new(dataset_id);
    let records = db_services::get_records(state.repository.as_ref(), dataset_id).await?;
    let config = state.config.clone();

    let data = run_blocking(move || services::compute_dashboard_data(&records, &spec, &config))
        .await?;

    Ok(Json(data))
}

/// POST /v1/datasets/{dataset_id}/discrepancy/{other_id}
///
/// Package filtered snippets of a supplier dataset and a customer dataset
/// for the external narrative generator. `dataset_id` must be a supplier
/// dataset and `other_id` a customer dataset.
pub async fn get_discrepancy(
    State(state): State<AppState>,
    Path((dataset_id, other_id)): Path<(i64, i64)>,
    Json(spec): Json<FilterState>,
) -> HandlerResult<DiscrepancyData> {
    validate_filter(&spec)?;
    let supplier = db_services::get_role_records(
        state.repository.as_ref(),
        DatasetId::new(dataset_id),
        DatasetRole::Supplier,
    )
    .await?;
    let customer = db_services::get_role_records(
        state.repository.as_ref(),
        DatasetId::new(other_id),
        DatasetRole::Customer,
    )
    .await?;
    let scope = state.config.comparison.scope;
    let snippet_limit = state.config.limits.snippet;

    let data = run_blocking(move || {
        services::compute_discrepancy_data(&supplier, &customer, &spec, scope, snippet_limit)
    })
    .await?
    .map_err(|e| AppError::Internal(format!("Failed to render prompt: {}", e)))?;

    Ok(Json(data))
}
