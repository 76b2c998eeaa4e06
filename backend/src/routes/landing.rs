use crate::api::DatasetId;
use serde::{Deserialize, Serialize};

/// Which side of a shipment a dataset was reported by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetRole {
    /// Dataset A: shipments as reported by the supplier.
    Supplier,
    /// Dataset B: receipts as reported by the customer.
    Customer,
}

/// Dataset listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub dataset_id: DatasetId,
    pub name: String,
    pub role: DatasetRole,
    pub record_count: usize,
    pub checksum: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DatasetRole::Supplier).unwrap(),
            "\"supplier\""
        );
        let role: DatasetRole = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(role, DatasetRole::Customer);
    }

    #[test]
    fn test_dataset_info_wire_format() {
        let info = DatasetInfo {
            dataset_id: DatasetId::new(7),
            name: "Supplier shipments".to_string(),
            role: DatasetRole::Supplier,
            record_count: 3,
            checksum: "abc".to_string(),
        };

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["dataset_id"], 7);
        assert_eq!(value["role"], "supplier");
        assert_eq!(value["record_count"], 3);

        let parsed: DatasetInfo = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.dataset_id, DatasetId::new(7));
        assert_eq!(parsed.name, "Supplier shipments");
        assert_eq!(parsed.role, DatasetRole::Supplier);
        assert_eq!(parsed.checksum, "abc");
    }
}
