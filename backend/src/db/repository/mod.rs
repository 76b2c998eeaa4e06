//! Dataset repository trait.
//!
//! Storage backends implement [`DatasetRepository`]; the rest of the crate
//! talks to storage only through this trait or the functions in
//! [`crate::db::services`].

pub mod error;

use async_trait::async_trait;

pub use error::{RepositoryError, RepositoryResult, StoreContext};

use crate::api::{Dataset, DatasetId, DatasetInfo, DistributionRecord};

/// Repository trait for dataset storage.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Check if the store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if it is unhealthy but no error occurred
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Store a dataset and return its listing entry.
    ///
    /// The incoming `id` is ignored; the repository assigns one. Storing a
    /// dataset whose name, role and checksum match an existing one returns
    /// the existing entry instead of creating a duplicate.
    async fn store_dataset(&self, dataset: &Dataset) -> RepositoryResult<DatasetInfo>;

    /// Retrieve a complete dataset by ID.
    ///
    /// # Returns
    /// * `Err(RepositoryError::DatasetNotFound)` - If the dataset doesn't exist
    async fn get_dataset(&self, dataset_id: DatasetId) -> RepositoryResult<Dataset>;

    /// Records of a dataset, in ingestion order.
    async fn get_records(&self, dataset_id: DatasetId)
        -> RepositoryResult<Vec<DistributionRecord>>;

    /// All stored datasets, ordered by ID.
    async fn list_datasets(&self) -> RepositoryResult<Vec<DatasetInfo>>;

    /// Remove a dataset. Returns `false` if it did not exist.
    async fn delete_dataset(&self, dataset_id: DatasetId) -> RepositoryResult<bool>;
}
