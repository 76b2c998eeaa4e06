//! Built-in sample datasets.
//!
//! The default data source is a generated supplier dataset (A) plus a customer
//! dataset (B) derived from it with a few planted inconsistencies, so the
//! discrepancy view has something to report.

use chrono::NaiveDate;

use crate::models::DistributionRecord;

/// Record count of the default supplier dataset.
pub const DEFAULT_SOURCE_SIZE: usize = 20;

/// Delivery date written into shifted customer records.
pub const SHIFTED_DELIVER_DATE: &str = "2025-11-01";

const SUPPLIERS: [&str; 2] = ["MedTech-A", "BioLife-B"];
const CATEGORIES: [&str; 3] = ["Cardiac", "Ortho", "Dental"];
const FALLBACK_YEAR: i32 = 2023;

fn fallback_date(i: usize) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(FALLBACK_YEAR, (i % 12) as u32 + 1, (i % 28) as u32 + 1)
}

/// Generate `count` deterministic supplier records.
///
/// Suppliers alternate, categories cycle every three records, models every
/// five and customers every four. Quantities fall in `1..=50`.
pub fn generate_fallback_records(count: usize) -> Vec<DistributionRecord> {
    (0..count)
        .map(|i| {
            let date = fallback_date(i);
            let deliver_date = date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            let stamp = date
                .map(|d| d.format("%Y%m%d").to_string())
                .unwrap_or_default();

            DistributionRecord {
                supplier_id: SUPPLIERS[i % SUPPLIERS.len()].to_string(),
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                license_no: format!("LIC-{}", 1000 + i),
                model: format!("M-{}", 200 + i % 5),
                lot_no: format!("L-{}", 5000 + i),
                serial_no: format!("SN-{}-{}", stamp, i),
                customer_id: format!("HOSP-{}", 100 + i % 4),
                deliver_date,
                quantity: ((i * 37 + 11) % 50) as i64 + 1,
            }
        })
        .collect()
}

/// Derive a customer-reported dataset from supplier records.
///
/// Every 7th record (index 0, 7, 14, ...) reports one extra unit; of the rest,
/// every 11th carries a shifted delivery date. Other records are copied as-is.
pub fn simulate_customer_records(records: &[DistributionRecord]) -> Vec<DistributionRecord> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut copy = record.clone();
            if i % 7 == 0 {
                copy.quantity += 1;
            } else if i % 11 == 0 {
                copy.deliver_date = SHIFTED_DELIVER_DATE.to_string();
            }
            copy
        })
        .collect()
}
