use serde::{Deserialize, Serialize};

use crate::models::{DistributionRecord, FilterScope};

/// Paired, bounded snippets handed to the external narrative generator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscrepancySnapshot {
    /// Prefix of the supplier-reported set (A).
    pub snippet_a: Vec<DistributionRecord>,
    /// Prefix of the customer-reported set (B).
    pub snippet_b: Vec<DistributionRecord>,
}

impl DiscrepancySnapshot {
    pub fn is_empty(&self) -> bool {
        self.snippet_a.is_empty() && self.snippet_b.is_empty()
    }
}

/// Discrepancy handoff payload returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscrepancyData {
    pub snapshot: DiscrepancySnapshot,
    /// Prompt text ready to forward to the text-generation collaborator.
    pub prompt: String,
    /// Rule set the comparison (B) set was filtered with.
    pub comparison_scope: FilterScope,
    pub supplier_matches: usize,
    pub customer_matches: usize,
}
