use serde::{Deserialize, Serialize};

/// Scatter point of the simulated geospatial view (one per record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZonePoint {
    pub offset: i32,
    pub quantity: i64,
    pub category: String,
}

/// Records and volume landing on a single GMT offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZoneBin {
    pub offset: i32,
    pub record_count: usize,
    pub quantity: i64,
}
