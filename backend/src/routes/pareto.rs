use serde::{Deserialize, Serialize};

/// One bar of the Pareto chart with its cumulative share line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParetoRow {
    pub model: String,
    pub quantity: i64,
    /// Running share of the grand total, rounded to a whole percent.
    pub cumulative_percent: i64,
}
