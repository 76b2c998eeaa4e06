//! Supplier -> license -> model -> customer network flow.
//!
//! [`aggregate_flow_graph`] produces the dense diagram the dashboard has always
//! drawn: each node is linked to every node of the next layer. Those links say
//! nothing about which supplier actually shipped which model.
//! [`aggregate_provenance_flow`] keeps the same layers but only links pairs
//! that travel together in at least one record, weighted by summed quantity.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::api::{
    DistributionRecord, FlowGraph, FlowLayer, FlowLayerKind, FlowLink, FlowLinkMode, FlowNode,
};

pub const DEFAULT_SUPPLIER_NODES: usize = 5;
pub const DEFAULT_LICENSE_NODES: usize = 5;
pub const DEFAULT_MODEL_NODES: usize = 6;
pub const DEFAULT_CUSTOMER_NODES: usize = 8;

/// Maximum node count per flow layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowCaps {
    pub supplier: usize,
    pub license: usize,
    pub model: usize,
    pub customer: usize,
}

impl Default for FlowCaps {
    fn default() -> Self {
        Self {
            supplier: DEFAULT_SUPPLIER_NODES,
            license: DEFAULT_LICENSE_NODES,
            model: DEFAULT_MODEL_NODES,
            customer: DEFAULT_CUSTOMER_NODES,
        }
    }
}

impl FlowCaps {
    pub fn cap(&self, kind: FlowLayerKind) -> usize {
        match kind {
            FlowLayerKind::Supplier => self.supplier,
            FlowLayerKind::License => self.license,
            FlowLayerKind::Model => self.model,
            FlowLayerKind::Customer => self.customer,
        }
    }
}

fn layer_value(record: &DistributionRecord, kind: FlowLayerKind) -> &str {
    match kind {
        FlowLayerKind::Supplier => &record.supplier_id,
        FlowLayerKind::License => &record.license_no,
        FlowLayerKind::Model => &record.model,
        FlowLayerKind::Customer => &record.customer_id,
    }
}

/// Distinct values of one column, first-seen order, truncated to `cap`.
fn collect_layer(records: &[DistributionRecord], kind: FlowLayerKind, cap: usize) -> FlowLayer {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut nodes = Vec::new();

    for record in records {
        if nodes.len() >= cap {
            break;
        }
        let value = layer_value(record, kind);
        if seen.insert(value) {
            nodes.push(FlowNode {
                name: value.to_string(),
                category: kind,
            });
        }
    }

    FlowLayer { kind, nodes }
}

fn collect_layers(records: &[DistributionRecord], caps: &FlowCaps) -> Vec<FlowLayer> {
    FlowLayerKind::ORDERED
        .iter()
        .map(|kind| collect_layer(records, *kind, caps.cap(*kind)))
        .collect()
}

/// Dense flow graph: one link (value 1) per node pair of adjacent layers.
pub fn aggregate_flow_graph(records: &[DistributionRecord], caps: &FlowCaps) -> FlowGraph {
    let layers = collect_layers(records, caps);

    let mut links = Vec::new();
    for pair in layers.windows(2) {
        for source in &pair[0].nodes {
            for target in &pair[1].nodes {
                links.push(FlowLink {
                    source: source.name.clone(),
                    target: target.name.clone(),
                    value: 1,
                });
            }
        }
    }

    FlowGraph {
        layers,
        links,
        link_mode: FlowLinkMode::Complete,
    }
}

/// Provenance flow graph: links only between co-occurring values.
///
/// Layers are identical to [`aggregate_flow_graph`]. For each adjacent layer
/// pair, records whose two values both survived truncation contribute their
/// quantity to that link. Links are grouped by layer pair and appear in
/// first-seen order within a group.
pub fn aggregate_provenance_flow(records: &[DistributionRecord], caps: &FlowCaps) -> FlowGraph {
    let layers = collect_layers(records, caps);

    let mut links: Vec<FlowLink> = Vec::new();
    for pair in layers.windows(2) {
        let sources: HashSet<&str> = pair[0].nodes.iter().map(|n| n.name.as_str()).collect();
        let targets: HashSet<&str> = pair[1].nodes.iter().map(|n| n.name.as_str()).collect();
        let mut index: HashMap<(&str, &str), usize> = HashMap::new();
        let mut group: Vec<FlowLink> = Vec::new();

        for record in records {
            let source = layer_value(record, pair[0].kind);
            let target = layer_value(record, pair[1].kind);
            if !sources.contains(source) || !targets.contains(target) {
                continue;
            }
            match index.get(&(source, target)) {
                Some(&idx) => {
                    let link = &mut group[idx];
                    link.value = link.value.saturating_add(record.quantity);
                }
                None => {
                    index.insert((source, target), group.len());
                    group.push(FlowLink {
                        source: source.to_string(),
                        target: target.to_string(),
                        value: record.quantity,
                    });
                }
            }
        }

        links.extend(group);
    }

    FlowGraph {
        layers,
        links,
        link_mode: FlowLinkMode::Provenance,
    }
}

/// Build the flow graph in the requested link mode.
pub fn aggregate_flow(
    records: &[DistributionRecord],
    caps: &FlowCaps,
    mode: FlowLinkMode,
) -> FlowGraph {
    match mode {
        FlowLinkMode::Complete => aggregate_flow_graph(records, caps),
        FlowLinkMode::Provenance => aggregate_provenance_flow(records, caps),
    }
}
