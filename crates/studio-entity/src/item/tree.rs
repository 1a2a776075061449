//! Nested tree structures for hierarchical display.

use serde::{Deserialize, Serialize};

use studio_core::types::ItemId;

use super::model::ItemKind;

/// A node in an item tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemNode {
    /// Item ID.
    pub id: ItemId,
    /// Item name.
    pub name: String,
    /// Folder or file.
    pub kind: ItemKind,
    /// Depth level (0 for root-level items).
    pub depth: usize,
    /// Number of direct child folders.
    pub folder_count: u64,
    /// Number of direct child files.
    pub file_count: u64,
    /// Child nodes, in listing order.
    pub children: Vec<ItemNode>,
}

impl ItemNode {
    /// Number of nodes in this subtree, including this one.
    pub fn subtree_size(&self) -> u64 {
        1 + self
            .children
            .iter()
            .map(ItemNode::subtree_size)
            .sum::<u64>()
    }
}

/// The whole forest, as nested nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTree {
    /// The root-level node(s) of the tree.
    pub roots: Vec<ItemNode>,
    /// Total number of items in the tree.
    pub total_items: u64,
}

impl ItemTree {
    /// Create an empty tree.
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            total_items: 0,
        }
    }

    /// Build a tree from root nodes, counting every node.
    pub fn from_roots(roots: Vec<ItemNode>) -> Self {
        let total_items = roots.iter().map(ItemNode::subtree_size).sum();
        Self { roots, total_items }
    }

    /// Check if the tree has no items.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
