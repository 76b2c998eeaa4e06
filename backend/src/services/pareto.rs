use std::collections::HashMap;

use crate::api::{DistributionRecord, ParetoRow};

/// Default number of Pareto rows drawn in the chart.
pub const DEFAULT_PARETO_DISPLAY_LIMIT: usize = 10;

/// Sum quantity per model in first-seen order.
fn model_totals(records: &[DistributionRecord]) -> Vec<(String, i64)> {
    let mut totals: Vec<(String, i64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.model.as_str()) {
            Some(&idx) => {
                let total = &mut totals[idx].1;
                *total = total.saturating_add(record.quantity);
            }
            None => {
                index.insert(record.model.as_str(), totals.len());
                totals.push((record.model.clone(), record.quantity));
            }
        }
    }

    totals
}

/// Running share of `total`, rounded to a whole percent. Zero total yields 0.
fn cumulative_percent(running: i128, total: i128) -> i64 {
    if total == 0 {
        return 0;
    }
    (100.0 * running as f64 / total as f64).round() as i64
}

/// Rank models by summed quantity with a cumulative share of the grand total.
///
/// The sort is stable, so models with equal volume keep their first-seen order.
pub fn aggregate_pareto(records: &[DistributionRecord]) -> Vec<ParetoRow> {
    let mut totals = model_totals(records);
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    // Wide accumulators: per-model totals are bounded by i64, their sum is not.
    let grand_total: i128 = totals.iter().map(|(_, q)| i128::from(*q)).sum();
    let mut running = 0i128;

    totals
        .into_iter()
        .map(|(model, quantity)| {
            running += i128::from(quantity);
            ParetoRow {
                model,
                quantity,
                cumulative_percent: cumulative_percent(running, grand_total),
            }
        })
        .collect()
}
