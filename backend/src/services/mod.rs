//! Service layer: filtering and view-model computation.
//!
//! Every function here is pure and synchronous. It takes record slices and a
//! filter state and returns fresh values, so services can be called from
//! blocking worker threads without shared state.

pub mod category_tree;
pub mod co_occurrence;
pub mod dashboard;
pub mod discrepancy;
pub mod filter;
pub mod flow_graph;
pub mod pareto;
pub mod preview;
pub mod summary;
pub mod time_zone;
pub mod time_zones;
pub mod timeline;


pub use category_tree::aggregate_category_tree;
pub use co_occurrence::aggregate_co_occurrence;
pub use dashboard::compute_dashboard_data;
pub use discrepancy::{
    build_discrepancy_snapshot, compute_discrepancy_data, DiscrepancyPrompt,
};
pub use filter::{filter, filter_reduced, filter_with_scope, matches_full, matches_reduced};
pub use flow_graph::{aggregate_flow, aggregate_flow_graph, aggregate_provenance_flow, FlowCaps};
pub use pareto::aggregate_pareto;
pub use preview::compute_preview;
pub use summary::compute_summary;
pub use time_zone::derive_time_zone;
pub use time_zones::{aggregate_time_zone_histogram, aggregate_time_zone_points};
pub use timeline::aggregate_time_series;
