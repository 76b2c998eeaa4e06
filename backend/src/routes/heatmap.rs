use serde::{Deserialize, Serialize};

/// One cell of the model x customer mosaic heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoOccurrenceCell {
    pub model: String,
    pub customer: String,
    /// Number of records sharing this (model, customer) pair.
    pub count: usize,
}
