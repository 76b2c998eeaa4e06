//! End-to-end tests: parse a record set, filter it and derive every view.

mod support;

use distribution_lab::api::{FilterScope, FilterState, TimeZoneRange};
use distribution_lab::config::DashboardConfig;
use distribution_lab::parsing::{parse_records, sources};
use distribution_lab::services;

use support::{sample_csv, sample_records};

#[test]
fn test_csv_upload_feeds_dashboard() {
    let records = parse_records(&sample_csv()).unwrap();
    assert_eq!(records, sample_records());

    let data = services::compute_dashboard_data(
        &records,
        &FilterState::default(),
        &DashboardConfig::default(),
    );

    assert_eq!(data.total_count, 6);
    assert_eq!(data.filtered_count, 6);
    assert_eq!(data.summary.total_quantity, 100);
    assert_eq!(data.time_series.len(), 6);
    assert_eq!(data.time_series[0].date, "2023-01-05");
    assert_eq!(data.co_occurrence.len(), 6);

    let categories: Vec<&str> = data
        .category_tree
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(categories, vec!["Cardiac", "Ortho", "Dental"]);
    assert_eq!(data.category_tree[0].total_size(), 60);

    let pareto: Vec<(&str, i64, i64)> = data
        .pareto
        .iter()
        .map(|r| (r.model.as_str(), r.quantity, r.cumulative_percent))
        .collect();
    assert_eq!(
        pareto,
        vec![("M-200", 65, 65), ("M-201", 25, 90), ("M-202", 10, 100)]
    );
}

#[test]
fn test_time_zone_filter_flows_into_aggregations() {
    let records = sample_records();
    // HOSP-100 -> -12, HOSP-101 -> -11, HOSP-102 -> -10
    let spec = FilterState::default()
        .with_time_zone_range(TimeZoneRange::new(-11, -10).unwrap());

    let data = services::compute_dashboard_data(&records, &spec, &DashboardConfig::default());

    assert_eq!(data.filtered_count, 4);
    assert_eq!(data.summary.total_quantity, 50);
    assert!(data
        .time_zone_points
        .iter()
        .all(|p| p.offset == -11 || p.offset == -10));
    assert_eq!(data.pareto.last().map(|r| r.cumulative_percent), Some(100));
}

#[test]
fn test_filter_with_no_match_yields_empty_views() {
    let records = sample_records();
    let spec = FilterState::default().with_models(["M-999"]);

    let data = services::compute_dashboard_data(&records, &spec, &DashboardConfig::default());

    assert_eq!(data.filtered_count, 0);
    assert!(data.time_series.is_empty());
    assert!(data.category_tree.is_empty());
    assert!(data.flow_graph.is_empty());
    assert!(data.co_occurrence.is_empty());
    assert!(data.pareto.is_empty());
}

#[test]
fn test_default_sources_discrepancy() {
    let supplier = sources::generate_fallback_records(sources::DEFAULT_SOURCE_SIZE);
    let customer = sources::simulate_customer_records(&supplier);

    // M-200 appears at indices 0, 5, 10, 15; only index 0 ships to HOSP-100.
    let spec = FilterState::default()
        .with_models(["M-200"])
        .with_search("hosp-100");

    let reduced =
        services::compute_discrepancy_data(&supplier, &customer, &spec, FilterScope::Reduced, 10)
            .unwrap();
    assert_eq!(reduced.supplier_matches, 1);
    assert_eq!(reduced.customer_matches, 4);
    assert_eq!(reduced.comparison_scope, FilterScope::Reduced);
    // Index 0 carries the planted extra unit.
    assert_eq!(
        reduced.snapshot.snippet_b[0].quantity,
        reduced.snapshot.snippet_a[0].quantity + 1
    );

    let full =
        services::compute_discrepancy_data(&supplier, &customer, &spec, FilterScope::Full, 10)
            .unwrap();
    assert_eq!(full.supplier_matches, 1);
    assert_eq!(full.customer_matches, 1);
    assert!(full.prompt.contains("Dataset A (Supplier)"));
}

#[test]
fn test_snippet_limit_bounds_snapshot() {
    let supplier = sources::generate_fallback_records(sources::DEFAULT_SOURCE_SIZE);
    let customer = sources::simulate_customer_records(&supplier);

    let data = services::compute_discrepancy_data(
        &supplier,
        &customer,
        &FilterState::default(),
        FilterScope::Reduced,
        3,
    )
    .unwrap();

    assert_eq!(data.supplier_matches, 20);
    assert_eq!(data.snapshot.snippet_a.len(), 3);
    assert_eq!(data.snapshot.snippet_b.len(), 3);
    assert_eq!(data.snapshot.snippet_a[0].serial_no, supplier[0].serial_no);
}
