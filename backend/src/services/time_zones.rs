use std::collections::BTreeMap;

use crate::api::{DistributionRecord, TimeZoneBin, TimeZonePoint};

/// One scatter point per record: derived offset, volume and category.
pub fn aggregate_time_zone_points(records: &[DistributionRecord]) -> Vec<TimeZonePoint> {
    records
        .iter()
        .map(|r| TimeZonePoint {
            offset: r.gmt_offset(),
            quantity: r.quantity,
            category: r.category.clone(),
        })
        .collect()
}

/// Record count and summed quantity per occupied offset, ascending.
pub fn aggregate_time_zone_histogram(records: &[DistributionRecord]) -> Vec<TimeZoneBin> {
    let mut bins: BTreeMap<i32, (usize, i64)> = BTreeMap::new();

    for record in records {
        let entry = bins.entry(record.gmt_offset()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 = entry.1.saturating_add(record.quantity);
    }

    bins.into_iter()
        .map(|(offset, (record_count, quantity))| TimeZoneBin {
            offset,
            record_count,
            quantity,
        })
        .collect()
}
