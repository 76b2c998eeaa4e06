use std::collections::HashSet;

use crate::api::{DatasetSummary, DistributionRecord};

/// Record count, total volume and distinct supplier/model/customer counts.
pub fn compute_summary(records: &[DistributionRecord]) -> DatasetSummary {
    let suppliers: HashSet<&str> = records.iter().map(|r| r.supplier_id.as_str()).collect();
    let models: HashSet<&str> = records.iter().map(|r| r.model.as_str()).collect();
    let customers: HashSet<&str> = records.iter().map(|r| r.customer_id.as_str()).collect();

    DatasetSummary {
        record_count: records.len(),
        total_quantity: records
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.quantity)),
        supplier_count: suppliers.len(),
        model_count: models.len(),
        customer_count: customers.len(),
    }
}
