use std::collections::HashMap;

use crate::api::{CategoryNode, DistributionRecord, ModelLeaf};

/// Group records by category, summing quantity per model.
///
/// Categories appear in first-seen order, and within a category so do models.
/// A repeated (category, model) pair adds to the existing leaf. Sums saturate
/// at the `i64` bounds.
pub fn aggregate_category_tree(records: &[DistributionRecord]) -> Vec<CategoryNode> {
    let mut nodes: Vec<CategoryNode> = Vec::new();
    let mut category_index: HashMap<&str, usize> = HashMap::new();
    let mut leaf_index: HashMap<(&str, &str), usize> = HashMap::new();

    for record in records {
        let node_idx = *category_index
            .entry(record.category.as_str())
            .or_insert_with(|| {
                nodes.push(CategoryNode {
                    category: record.category.clone(),
                    children: Vec::new(),
                });
                nodes.len() - 1
            });

        let node = &mut nodes[node_idx];
        match leaf_index.get(&(record.category.as_str(), record.model.as_str())) {
            Some(&leaf_idx) => {
                let leaf = &mut node.children[leaf_idx];
                leaf.size = leaf.size.saturating_add(record.quantity);
            }
            None => {
                leaf_index.insert(
                    (record.category.as_str(), record.model.as_str()),
                    node.children.len(),
                );
                node.children.push(ModelLeaf {
                    model: record.model.clone(),
                    size: record.quantity,
                });
            }
        }
    }

    nodes
}
