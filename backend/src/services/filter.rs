//! Filter engine over distribution records.
//!
//! Two rule sets are exposed:
//!
//! - the **full** predicate evaluates every clause of a [`FilterState`];
//! - the **reduced** predicate evaluates only the supplier and model
//!   exact-match clauses.
//!
//! Callers pick one explicitly, either by calling the named function or by
//! passing a [`FilterScope`] to [`filter_with_scope`].

use std::collections::BTreeSet;

use crate::models::{DistributionRecord, FilterScope, FilterState};

fn allowed(set: &BTreeSet<String>, value: &str) -> bool {
    set.is_empty() || set.contains(value)
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Full predicate: every clause, ANDed, first failure wins.
pub fn matches_full(record: &DistributionRecord, spec: &FilterState) -> bool {
    if !spec.search_query.is_empty() {
        let query = spec.search_query.to_lowercase();
        if !record
            .field_values()
            .any(|value| value.to_lowercase().contains(&query))
        {
            return false;
        }
    }

    if !allowed(&spec.supplier_ids, &record.supplier_id)
        || !allowed(&spec.categories, &record.category)
        || !allowed(&spec.license_nos, &record.license_no)
        || !allowed(&spec.model_ids, &record.model)
        || !allowed(&spec.customer_ids, &record.customer_id)
    {
        return false;
    }

    if !spec.lot_query.is_empty()
        && !contains_ignore_case(&record.lot_no, &spec.lot_query.to_lowercase())
    {
        return false;
    }

    if !spec.serial_query.is_empty()
        && !contains_ignore_case(&record.serial_no, &spec.serial_query.to_lowercase())
    {
        return false;
    }

    spec.time_zone_range.contains(record.gmt_offset())
}

/// Reduced predicate: supplier and model exact matches only.
pub fn matches_reduced(record: &DistributionRecord, spec: &FilterState) -> bool {
    allowed(&spec.supplier_ids, &record.supplier_id) && allowed(&spec.model_ids, &record.model)
}

/// Records matching the full predicate, in input order.
pub fn filter(records: &[DistributionRecord], spec: &FilterState) -> Vec<DistributionRecord> {
    let filtered: Vec<DistributionRecord> = records
        .iter()
        .filter(|r| matches_full(r, spec))
        .cloned()
        .collect();

    log::debug!(
        "full filter kept {} of {} records",
        filtered.len(),
        records.len()
    );
    filtered
}

/// Records matching the reduced predicate, in input order.
pub fn filter_reduced(
    records: &[DistributionRecord],
    spec: &FilterState,
) -> Vec<DistributionRecord> {
    let filtered: Vec<DistributionRecord> = records
        .iter()
        .filter(|r| matches_reduced(r, spec))
        .cloned()
        .collect();

    log::debug!(
        "reduced filter kept {} of {} records",
        filtered.len(),
        records.len()
    );
    filtered
}

/// Dispatch to [`filter`] or [`filter_reduced`].
pub fn filter_with_scope(
    records: &[DistributionRecord],
    spec: &FilterState,
    scope: FilterScope,
) -> Vec<DistributionRecord> {
    match scope {
        FilterScope::Full => filter(records, spec),
        FilterScope::Reduced => filter_reduced(records, spec),
    }
}
