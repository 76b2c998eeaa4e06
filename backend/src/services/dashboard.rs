//! Dashboard view-model assembly.
//!
//! Every chart is derived from the same filtered record set, so the filter
//! runs exactly once per request and each aggregation reads its result.

use crate::api::{DashboardData, DistributionRecord};
use crate::config::DashboardConfig;
use crate::models::FilterState;

use super::category_tree::aggregate_category_tree;
use super::co_occurrence::aggregate_co_occurrence;
use super::filter::filter;
use super::flow_graph::aggregate_flow;
use super::pareto::aggregate_pareto;
use super::summary::compute_summary;
use super::time_zones::{aggregate_time_zone_histogram, aggregate_time_zone_points};
use super::timeline::aggregate_time_series;

/// Filter `records` with the full predicate and compute every view.
pub fn compute_dashboard_data(
    records: &[DistributionRecord],
    spec: &FilterState,
    config: &DashboardConfig,
) -> DashboardData {
    let filtered = filter(records, spec);

    let pareto = aggregate_pareto(&filtered);
    let pareto_top = pareto
        .iter()
        .take(config.limits.pareto_display)
        .cloned()
        .collect();

    let data = DashboardData {
        total_count: records.len(),
        filtered_count: filtered.len(),
        summary: compute_summary(&filtered),
        time_series: aggregate_time_series(&filtered, config.limits.time_series),
        category_tree: aggregate_category_tree(&filtered),
        flow_graph: aggregate_flow(&filtered, &config.flow.caps(), config.flow.link_mode),
        co_occurrence: aggregate_co_occurrence(&filtered),
        pareto,
        pareto_top,
        time_zone_points: aggregate_time_zone_points(&filtered),
        time_zone_histogram: aggregate_time_zone_histogram(&filtered),
    };

    log::debug!(
        "dashboard: {} of {} records, {} categories, {} flow links, {} pareto rows",
        data.filtered_count,
        data.total_count,
        data.category_tree.len(),
        data.flow_graph.links.len(),
        data.pareto.len()
    );

    data
}
