//! Dataset storage.
//!
//! Record sets are kept behind the [`DatasetRepository`] trait so the HTTP
//! layer never depends on a concrete store.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API)                           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - Checksums and validation                             │
//! │  - Default data sources                                 │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────┐
//!     │       Local Repository        │
//!     │         (in-memory)           │
//!     └──────────────────────────────┘
//! ```

pub mod checksum;
pub mod repositories;
pub mod repository;
pub mod services;


pub use checksum::calculate_checksum;
pub use repositories::LocalRepository;
pub use repository::{DatasetRepository, RepositoryError, RepositoryResult, StoreContext};
pub use services::{
    delete_dataset, get_dataset, get_records, get_role_records, health_check, list_datasets,
    load_default_sources, store_dataset,
};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn DatasetRepository>> = OnceLock::new();

/// Initialize the global repository singleton.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo: Arc<dyn DatasetRepository> = Arc::new(LocalRepository::new());
    let _ = REPOSITORY.set(repo);
    log::info!("Initialized in-memory dataset repository");
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn DatasetRepository>> {
    if REPOSITORY.get().is_none() {
        init_repository()?;
    }

    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
