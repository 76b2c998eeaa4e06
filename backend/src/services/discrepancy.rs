//! Discrepancy snapshot packaging.
//!
//! The core does not detect discrepancies itself. It truncates the supplier
//! (A) and customer (B) record sets to short, order-preserving snippets and
//! renders them into a prompt for the external text-generation collaborator.

use crate::api::{DiscrepancyData, DiscrepancySnapshot, DistributionRecord};
use crate::models::{FilterScope, FilterState};
use crate::services::filter::{filter, filter_with_scope};

/// Default number of records per snippet.
pub const DEFAULT_SNIPPET_LIMIT: usize = 10;

/// Take the first `limit` records of each set.
///
/// An empty input yields an empty snippet, never an error.
pub fn build_discrepancy_snapshot(
    records_a: &[DistributionRecord],
    records_b: &[DistributionRecord],
    limit: usize,
) -> DiscrepancySnapshot {
    DiscrepancySnapshot {
        snippet_a: records_a.iter().take(limit).cloned().collect(),
        snippet_b: records_b.iter().take(limit).cloned().collect(),
    }
}

/// Prompt text asking the narrative generator to compare the two snippets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscrepancyPrompt {
    pub text: String,
}

impl DiscrepancyPrompt {
    pub fn from_snapshot(snapshot: &DiscrepancySnapshot) -> Result<Self, serde_json::Error> {
        let snippet_a = serde_json::to_string(&snapshot.snippet_a)?;
        let snippet_b = serde_json::to_string(&snapshot.snippet_b)?;

        let text = format!(
            "You are a Regulatory Compliance Agent.\n\
             Analyze these two dataset snippets for inconsistencies.\n\
             Dataset A (Supplier): {}\n\
             Dataset B (Customer): {}\n\
             \n\
             Identify potential gaps in serial numbers or delivery dates.\n\
             Return a summary in Markdown format, marking alerts clearly.\n",
            snippet_a, snippet_b
        );

        Ok(Self { text })
    }
}

/// Filter both sets, snapshot them and render the prompt.
///
/// The supplier set always goes through the full predicate. The customer set
/// uses `comparison_scope`, which is echoed back in the result so the caller
/// can see which rule set produced it.
pub fn compute_discrepancy_data(
    supplier_records: &[DistributionRecord],
    customer_records: &[DistributionRecord],
    spec: &FilterState,
    comparison_scope: FilterScope,
    snippet_limit: usize,
) -> Result<DiscrepancyData, serde_json::Error> {
    let filtered_a = filter(supplier_records, spec);
    let filtered_b = filter_with_scope(customer_records, spec, comparison_scope);

    let snapshot = build_discrepancy_snapshot(&filtered_a, &filtered_b, snippet_limit);
    let prompt = DiscrepancyPrompt::from_snapshot(&snapshot)?;

    Ok(DiscrepancyData {
        snapshot,
        prompt: prompt.text,
        comparison_scope,
        supplier_matches: filtered_a.len(),
        customer_matches: filtered_b.len(),
    })
}
