//! Public API surface for the distribution lab backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::DistributionRecord;
pub use crate::models::FilterScope;
pub use crate::models::FilterState;
pub use crate::models::TimeZoneRange;
pub use crate::routes::category::CategoryNode;
pub use crate::routes::category::ModelLeaf;
pub use crate::routes::dashboard::DashboardData;
pub use crate::routes::dashboard::DatasetSummary;
pub use crate::routes::dashboard::PreviewData;
pub use crate::routes::discrepancy::DiscrepancyData;
pub use crate::routes::discrepancy::DiscrepancySnapshot;
pub use crate::routes::flow::FlowGraph;
pub use crate::routes::flow::FlowLayer;
pub use crate::routes::flow::FlowLayerKind;
pub use crate::routes::flow::FlowLink;
pub use crate::routes::flow::FlowLinkMode;
pub use crate::routes::flow::FlowNode;
pub use crate::routes::heatmap::CoOccurrenceCell;
pub use crate::routes::landing::DatasetInfo;
pub use crate::routes::landing::DatasetRole;
pub use crate::routes::pareto::ParetoRow;
pub use crate::routes::timeline::TimeSeriesPoint;
pub use crate::routes::timezone::TimeZoneBin;
pub use crate::routes::timezone::TimeZonePoint;

use serde::{Deserialize, Serialize};

/// Dataset identifier (repository key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DatasetId(pub i64);

impl DatasetId {
    pub fn new(value: i64) -> Self {
        DatasetId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DatasetId> for i64 {
    fn from(id: DatasetId) -> Self {
        id.0
    }
}

/// A named record set as stored by the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Repository ID (server-assigned)
    pub id: Option<DatasetId>,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Which side of the shipment reported these records
    pub role: DatasetRole,
    /// SHA256 checksum of the source payload
    #[serde(default)]
    pub checksum: String,
    /// Records in ingestion order
    pub records: Vec<DistributionRecord>,
}

impl Dataset {
    pub fn new(
        name: impl Into<String>,
        role: DatasetRole,
        checksum: impl Into<String>,
        records: Vec<DistributionRecord>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            role,
            checksum: checksum.into(),
            records,
        }
    }

    /// Listing entry for this dataset, if it has been stored.
    pub fn info(&self) -> Option<DatasetInfo> {
        self.id.map(|dataset_id| DatasetInfo {
            dataset_id,
            name: self.name.clone(),
            role: self.role,
            record_count: self.records.len(),
            checksum: self.checksum.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_id_new() {
        let id = DatasetId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(i64::from(id), 42);
    }

    #[test]
    fn test_dataset_id_ordering() {
        let id1 = DatasetId::new(1);
        let id2 = DatasetId::new(2);
        assert!(id1 < id2);
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_dataset_id_display() {
        assert_eq!(DatasetId::new(7).to_string(), "7");
    }

    #[test]
    fn test_dataset_id_serializes_transparently() {
        assert_eq!(serde_json::to_string(&DatasetId(5)).unwrap(), "5");
    }

    #[test]
    fn test_unsaved_dataset_has_no_info() {
        let dataset = Dataset::new("Supplier", DatasetRole::Supplier, "abc", Vec::new());
        assert!(dataset.info().is_none());

        let saved = Dataset {
            id: Some(DatasetId::new(3)),
            ..dataset
        };
        let info = saved.info().unwrap();
        assert_eq!(info.dataset_id.value(), 3);
        assert_eq!(info.record_count, 0);
        assert_eq!(info.role, DatasetRole::Supplier);
    }
}
