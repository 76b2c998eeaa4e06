use serde::{Deserialize, Serialize};

/// The four columns of the network flow diagram, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowLayerKind {
    Supplier,
    License,
    Model,
    Customer,
}

impl FlowLayerKind {
    pub const ORDERED: [FlowLayerKind; 4] = [
        FlowLayerKind::Supplier,
        FlowLayerKind::License,
        FlowLayerKind::Model,
        FlowLayerKind::Customer,
    ];
}

/// A node in one flow layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    pub name: String,
    pub category: FlowLayerKind,
}

/// Distinct values of one column, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowLayer {
    pub kind: FlowLayerKind,
    pub nodes: Vec<FlowNode>,
}

/// Link between nodes of adjacent layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowLink {
    pub source: String,
    pub target: String,
    /// Always 1 for complete links; summed quantity for provenance links.
    pub value: i64,
}

/// How links between adjacent layers are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowLinkMode {
    /// Every node connects to every node of the next layer.
    #[default]
    Complete,
    /// Only pairs that appear together in at least one record, weighted by quantity.
    Provenance,
}

/// Layered supplier -> license -> model -> customer graph.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlowGraph {
    pub layers: Vec<FlowLayer>,
    pub links: Vec<FlowLink>,
    pub link_mode: FlowLinkMode,
}

impl FlowGraph {
    pub fn layer(&self, kind: FlowLayerKind) -> Option<&FlowLayer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|l| l.nodes.is_empty()) && self.links.is_empty()
    }
}
