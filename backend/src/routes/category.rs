use serde::{Deserialize, Serialize};

/// Leaf of the category treemap: one model with its summed quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelLeaf {
    pub model: String,
    pub size: i64,
}

/// Top level of the category treemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub category: String,
    pub children: Vec<ModelLeaf>,
}

impl CategoryNode {
    /// Summed quantity over all children.
    pub fn total_size(&self) -> i64 {
        self.children.iter().fold(0i64, |acc, c| acc.saturating_add(c.size))
    }
}
