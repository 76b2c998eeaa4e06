use crate::api::{DistributionRecord, TimeSeriesPoint};

/// Default number of records plotted on the shipment volume chart.
pub const DEFAULT_TIME_SERIES_LIMIT: usize = 20;

/// Project the first `limit` records onto `(date, quantity)` points.
///
/// Records keep their existing order; dates are not parsed, validated or sorted.
pub fn aggregate_time_series(records: &[DistributionRecord], limit: usize) -> Vec<TimeSeriesPoint> {
    records
        .iter()
        .take(limit)
        .map(|r| TimeSeriesPoint {
            date: r.deliver_date.clone(),
            quantity: r.quantity,
        })
        .collect()
}
