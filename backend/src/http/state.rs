//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::db::repository::DatasetRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for dataset storage
    pub repository: Arc<dyn DatasetRepository>,
    /// Truncation limits, flow settings and comparison scope
    pub config: Arc<DashboardConfig>,
}

impl AppState {
    pub fn new(repository: Arc<dyn DatasetRepository>, config: DashboardConfig) -> Self {
        Self {
            repository,
            config: Arc::new(config),
        }
    }

    /// State with the built-in dashboard defaults.
    pub fn with_default_config(repository: Arc<dyn DatasetRepository>) -> Self {
        Self::new(repository, DashboardConfig::default())
    }
}
