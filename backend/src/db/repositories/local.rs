//! In-memory local repository implementation.
//!
//! Datasets live in a `HashMap` behind a lock and disappear with the process.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{Dataset, DatasetId, DatasetInfo, DistributionRecord};
use crate::db::repository::{DatasetRepository, RepositoryError, RepositoryResult, StoreContext};

/// In-memory dataset repository.
///
/// Cloning is cheap; clones share the same storage.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    datasets: HashMap<DatasetId, Dataset>,
    next_dataset_id: DatasetId,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            datasets: HashMap::new(),
            next_dataset_id: DatasetId(1),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of datasets stored.
    pub fn dataset_count(&self) -> usize {
        self.data.read().datasets.len()
    }

    fn check_health(&self, operation: &'static str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::unavailable(
                "Local store is not healthy",
                StoreContext::new(operation),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatasetRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn store_dataset(&self, dataset: &Dataset) -> RepositoryResult<DatasetInfo> {
        self.check_health("store_dataset")?;
        let mut data = self.data.write();

        if let Some(existing) = data.datasets.values().find(|d| {
            d.name == dataset.name && d.role == dataset.role && d.checksum == dataset.checksum
        }) {
            log::debug!(
                "Dataset '{}' already stored with checksum {}",
                dataset.name,
                dataset.checksum
            );
            return existing.info().ok_or_else(|| RepositoryError::Corrupt {
                reason: "stored dataset has no ID".to_string(),
                context: StoreContext::new("store_dataset").named(existing.name.clone()),
            });
        }

        let dataset_id = data.next_dataset_id;
        data.next_dataset_id = DatasetId(dataset_id.0 + 1);

        let stored = Dataset {
            id: Some(dataset_id),
            ..dataset.clone()
        };
        let info = DatasetInfo {
            dataset_id,
            name: stored.name.clone(),
            role: stored.role,
            record_count: stored.records.len(),
            checksum: stored.checksum.clone(),
        };
        data.datasets.insert(dataset_id, stored);

        Ok(info)
    }

    async fn get_dataset(&self, dataset_id: DatasetId) -> RepositoryResult<Dataset> {
        self.check_health("get_dataset")?;
        self.data
            .read()
            .datasets
            .get(&dataset_id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(dataset_id, "get_dataset"))
    }

    async fn get_records(
        &self,
        dataset_id: DatasetId,
    ) -> RepositoryResult<Vec<DistributionRecord>> {
        self.check_health("get_records")?;
        self.data
            .read()
            .datasets
            .get(&dataset_id)
            .map(|d| d.records.clone())
            .ok_or_else(|| RepositoryError::not_found(dataset_id, "get_records"))
    }

    async fn list_datasets(&self) -> RepositoryResult<Vec<DatasetInfo>> {
        self.check_health("list_datasets")?;
        let data = self.data.read();

        let mut datasets: Vec<DatasetInfo> =
            data.datasets.values().filter_map(Dataset::info).collect();
        datasets.sort_by_key(|d| d.dataset_id);
        Ok(datasets)
    }

    async fn delete_dataset(&self, dataset_id: DatasetId) -> RepositoryResult<bool> {
        self.check_health("delete_dataset")?;
        Ok(self.data.write().datasets.remove(&dataset_id).is_some())
    }
}
