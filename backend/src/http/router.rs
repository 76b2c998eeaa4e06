//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Upper bound for uploaded dataset bodies.
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS for the browser frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Datasets
        .route(
            "/datasets",
            get(handlers::list_datasets).post(handlers::create_dataset),
        )
        .route("/datasets/default", post(handlers::load_default_datasets))
        .route(
            "/datasets/standardized",
            post(handlers::create_standardized_dataset),
        )
        .route("/datasets/{dataset_id}/preview", get(handlers::get_preview))
        // Visualization endpoints
        .route(
            "/datasets/{dataset_id}/dashboard",
            post(handlers::get_dashboard),
        )
        .route(
            "/datasets/{dataset_id}/discrepancy/{other_id}",
            post(handlers::get_discrepancy),
        )
        // Text-generation handoff
        .route(
            "/standardize/prompt",
            post(handlers::build_standardize_prompt),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::DatasetRepository;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo = Arc::new(LocalRepository::new()) as Arc<dyn DatasetRepository>;
        let state = AppState::with_default_config(repo);
        let _router = create_router(state);
    }
}
