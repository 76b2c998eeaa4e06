use serde::{Deserialize, Serialize};

/// One point of the shipment volume line chart.
///
/// Points keep input record order; dates are neither parsed nor sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: String,
    pub quantity: i64,
}
