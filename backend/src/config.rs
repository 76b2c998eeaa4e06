//! Dashboard configuration file support.
//!
//! Truncation limits, flow-layer caps, the flow link mode and the rule set
//! used for the comparison dataset are read from a TOML file. Every key is
//! optional; missing keys keep their defaults.
//!
//! ```toml
//! [limits]
//! time_series = 20
//! snippet = 10
//! preview_default = 20
//! preview_min = 5
//! preview_max = 50
//! pareto_display = 10
//!
//! [flow]
//! supplier = 5
//! license = 5
//! model = 6
//! customer = 8
//! link_mode = "complete"
//!
//! [comparison]
//! scope = "reduced"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::FlowLinkMode;
use crate::models::FilterScope;
use crate::services::discrepancy::DEFAULT_SNIPPET_LIMIT;
use crate::services::flow_graph::{
    FlowCaps, DEFAULT_CUSTOMER_NODES, DEFAULT_LICENSE_NODES, DEFAULT_MODEL_NODES,
    DEFAULT_SUPPLIER_NODES,
};
use crate::services::pareto::DEFAULT_PARETO_DISPLAY_LIMIT;
use crate::services::preview::{DEFAULT_PREVIEW_ROWS, MAX_PREVIEW_ROWS, MIN_PREVIEW_ROWS};
use crate::services::timeline::DEFAULT_TIME_SERIES_LIMIT;

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub limits: LimitSettings,
    pub flow: FlowSettings,
    pub comparison: ComparisonSettings,
}

/// Row counts for the truncated views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitSettings {
    pub time_series: usize,
    pub snippet: usize,
    pub preview_default: usize,
    pub preview_min: usize,
    pub preview_max: usize,
    pub pareto_display: usize,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            time_series: DEFAULT_TIME_SERIES_LIMIT,
            snippet: DEFAULT_SNIPPET_LIMIT,
            preview_default: DEFAULT_PREVIEW_ROWS,
            preview_min: MIN_PREVIEW_ROWS,
            preview_max: MAX_PREVIEW_ROWS,
            pareto_display: DEFAULT_PARETO_DISPLAY_LIMIT,
        }
    }
}

/// Flow diagram layer caps and link mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowSettings {
    pub supplier: usize,
    pub license: usize,
    pub model: usize,
    pub customer: usize,
    pub link_mode: FlowLinkMode,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            supplier: DEFAULT_SUPPLIER_NODES,
            license: DEFAULT_LICENSE_NODES,
            model: DEFAULT_MODEL_NODES,
            customer: DEFAULT_CUSTOMER_NODES,
            link_mode: FlowLinkMode::default(),
        }
    }
}

impl FlowSettings {
    pub fn caps(&self) -> FlowCaps {
        FlowCaps {
            supplier: self.supplier,
            license: self.license,
            model: self.model,
            customer: self.customer,
        }
    }
}

/// Rule set applied to the comparison (customer) dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonSettings {
    pub scope: FilterScope,
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        Self {
            scope: FilterScope::Reduced,
        }
    }
}

impl DashboardConfig {
    /// Parse configuration from TOML text and validate it.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: DashboardConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to the built-in defaults when no file exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Loading dashboard config from {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::info!("No dashboard.toml found, using defaults");
        Ok(Self::default())
    }

    /// Reject settings the views cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let caps = self.flow.caps();
        if caps.supplier == 0 || caps.license == 0 || caps.model == 0 || caps.customer == 0 {
            return Err(ConfigError::Invalid(
                "flow layer caps must be greater than zero".to_string(),
            ));
        }
        if self.limits.preview_min > self.limits.preview_max {
            return Err(ConfigError::Invalid(format!(
                "preview_min ({}) exceeds preview_max ({})",
                self.limits.preview_min, self.limits.preview_max
            )));
        }
        Ok(())
    }
}
