use std::collections::HashMap;

use crate::api::{CoOccurrenceCell, DistributionRecord};

/// Count records per distinct (model, customer) pair, first-seen order.
///
/// The counts always sum to `records.len()`.
pub fn aggregate_co_occurrence(records: &[DistributionRecord]) -> Vec<CoOccurrenceCell> {
    let mut cells: Vec<CoOccurrenceCell> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for record in records {
        let key = (record.model.as_str(), record.customer_id.as_str());
        match index.get(&key) {
            Some(&idx) => cells[idx].count += 1,
            None => {
                index.insert(key, cells.len());
                cells.push(CoOccurrenceCell {
                    model: record.model.clone(),
                    customer: record.customer_id.clone(),
                    count: 1,
                });
            }
        }
    }

    cells
}
