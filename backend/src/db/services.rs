//! High-level dataset service layer.
//!
//! Repository-agnostic operations with the logic that should not depend on
//! the storage backend: checksum computation, input validation and the
//! default data-source pair.
//!
//! # Usage
//!
//! ```no_run
//! use distribution_lab::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let (supplier, customer) = services::load_default_sources(&repo, 20).await?;
//!     println!("Loaded datasets {} and {}", supplier.dataset_id, customer.dataset_id);
//!     Ok(())
//! }
//! ```

use log::info;

use super::checksum::calculate_checksum;
use super::repository::{DatasetRepository, RepositoryError, RepositoryResult, StoreContext};
use crate::api::{Dataset, DatasetId, DatasetInfo, DatasetRole, DistributionRecord};
use crate::parsing::{generate_fallback_records, simulate_customer_records};

/// Display name of the default supplier dataset.
pub const DEFAULT_SUPPLIER_NAME: &str = "Default supplier shipments";
/// Display name of the default customer dataset.
pub const DEFAULT_CUSTOMER_NAME: &str = "Default customer receipts";

/// Check if the store is healthy.
pub async fn health_check<R: DatasetRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Checksum of a record list: SHA-256 over its canonical JSON form.
pub fn records_checksum(records: &[DistributionRecord]) -> RepositoryResult<String> {
    let canonical = serde_json::to_string(records)?;
    Ok(calculate_checksum(&canonical))
}

/// Validate, checksum and store a named record list.
///
/// # Returns
/// * `Err(RepositoryError::InvalidDataset)` if the name is blank
pub async fn store_dataset<R: DatasetRepository + ?Sized>(
    repo: &R,
    name: &str,
    role: DatasetRole,
    records: Vec<DistributionRecord>,
) -> RepositoryResult<DatasetInfo> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RepositoryError::invalid(
            "Dataset name must not be empty",
            StoreContext::new("store_dataset"),
        ));
    }

    let checksum = records_checksum(&records)?;
    info!(
        "Service layer: storing dataset '{}' ({:?}, checksum {}, {} records)",
        name,
        role,
        checksum,
        records.len()
    );

    let dataset = Dataset::new(name, role, checksum, records);
    repo.store_dataset(&dataset).await
}

/// List all stored datasets.
pub async fn list_datasets<R: DatasetRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<DatasetInfo>> {
    repo.list_datasets().await
}

/// Retrieve a complete dataset.
pub async fn get_dataset<R: DatasetRepository + ?Sized>(
    repo: &R,
    dataset_id: DatasetId,
) -> RepositoryResult<Dataset> {
    repo.get_dataset(dataset_id).await
}

/// Records of one dataset, in ingestion order.
pub async fn get_records<R: DatasetRepository + ?Sized>(
    repo: &R,
    dataset_id: DatasetId,
) -> RepositoryResult<Vec<DistributionRecord>> {
    repo.get_records(dataset_id).await
}

/// Records of a dataset that must have been reported by `expected`.
///
/// # Returns
/// * `Err(RepositoryError::RoleMismatch)` if the dataset belongs to the other side
pub async fn get_role_records<R: DatasetRepository + ?Sized>(
    repo: &R,
    dataset_id: DatasetId,
    expected: DatasetRole,
) -> RepositoryResult<Vec<DistributionRecord>> {
    let dataset = repo.get_dataset(dataset_id).await?;
    if dataset.role != expected {
        return Err(RepositoryError::RoleMismatch {
            dataset_id,
            expected,
            actual: dataset.role,
            context: StoreContext::new("get_role_records")
                .for_dataset(dataset_id)
                .named(dataset.name),
        });
    }
    Ok(dataset.records)
}

/// Remove a dataset.
pub async fn delete_dataset<R: DatasetRepository + ?Sized>(
    repo: &R,
    dataset_id: DatasetId,
) -> RepositoryResult<bool> {
    repo.delete_dataset(dataset_id).await
}

/// Store the built-in supplier dataset and its simulated customer copy.
///
/// Loading twice returns the same two datasets.
pub async fn load_default_sources<R: DatasetRepository + ?Sized>(
    repo: &R,
    count: usize,
) -> RepositoryResult<(DatasetInfo, DatasetInfo)> {
    let supplier_records = generate_fallback_records(count);
    let customer_records = simulate_customer_records(&supplier_records);

    let supplier = store_dataset(
        repo,
        DEFAULT_SUPPLIER_NAME,
        DatasetRole::Supplier,
        supplier_records,
    )
    .await?;
    let customer = store_dataset(
        repo,
        DEFAULT_CUSTOMER_NAME,
        DatasetRole::Customer,
        customer_records,
    )
    .await?;

    info!(
        "Service layer: default sources loaded as datasets {} and {}",
        supplier.dataset_id, customer.dataset_id
    );
    Ok((supplier, customer))
}
