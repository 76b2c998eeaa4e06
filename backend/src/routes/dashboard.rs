use serde::{Deserialize, Serialize};

use crate::models::DistributionRecord;

use super::category::CategoryNode;
use super::flow::FlowGraph;
use super::heatmap::CoOccurrenceCell;
use super::pareto::ParetoRow;
use super::timeline::TimeSeriesPoint;
use super::timezone::{TimeZoneBin, TimeZonePoint};

/// Headline numbers for a record set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub record_count: usize,
    pub total_quantity: i64,
    pub supplier_count: usize,
    pub model_count: usize,
    pub customer_count: usize,
}

/// First rows of a record set for the table preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewData {
    pub rows: Vec<DistributionRecord>,
    pub row_limit: usize,
    pub total_count: usize,
}

/// Every view model of the distribution lab, derived from one filtered set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub total_count: usize,
    pub filtered_count: usize,
    pub summary: DatasetSummary,
    pub time_series: Vec<TimeSeriesPoint>,
    pub category_tree: Vec<CategoryNode>,
    pub flow_graph: FlowGraph,
    pub co_occurrence: Vec<CoOccurrenceCell>,
    pub pareto: Vec<ParetoRow>,
    /// Leading Pareto rows shown in the chart.
    pub pareto_top: Vec<ParetoRow>,
    pub time_zone_points: Vec<TimeZonePoint>,
    pub time_zone_histogram: Vec<TimeZoneBin>,
}
