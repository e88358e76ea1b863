//! Flat-to-nested tree materialization.
//!
//! A journey's nodes are stored as parent-linked rows. The client
//! consumes a nested forest. [`materialize`] bridges the two: it takes
//! the rows of one journey, ordered the way siblings should appear
//! (ascending `created_at`), and produces root nodes with recursively
//! populated `children`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::NodeId;

/// One stored tree-node row, stripped to the fields materialization
/// needs. Order in the input slice is sibling order in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatNode {
    pub id: NodeId,
    pub name: String,
    /// `None` means the node carries no content, which is distinct
    /// from an empty string.
    pub content: Option<String>,
    pub parent_id: Option<NodeId>,
}

/// A materialized node: a [`FlatNode`] plus its nested subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub children: Vec<TreeNode>,
}

/// Convert one journey's flat rows into a nested forest.
///
/// Two linear passes: first collect the set of ids present in the
/// input, then group each row under its parent when that parent is in
/// the set, or under the root otherwise. A `parent_id` that does not
/// resolve within the input (parent deleted, or belonging to another
/// journey) deliberately degrades to "treated as a root"; callers
/// rely on materialization never dropping a node.
///
/// Guarantees: O(n) time and space, every input node appears exactly
/// once in the output, and relative input order is preserved among
/// siblings and among roots.
pub fn materialize(rows: Vec<FlatNode>) -> Vec<TreeNode> {
    // Pass 1: which ids can act as parents in this collection.
    let known: std::collections::HashSet<&str> =
        rows.iter().map(|row| row.id.as_str()).collect();

    // Pass 2: group row indices by resolved parent, in input order.
    let mut roots: Vec<usize> = Vec::new();
    let mut children_of: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, row) in rows.iter().enumerate() {
        match row.parent_id.as_deref().filter(|p| known.contains(p)) {
            Some(parent) => children_of.entry(parent).or_default().push(index),
            None => roots.push(index),
        }
    }

    roots
        .iter()
        .map(|&index| build_subtree(&rows, &children_of, index))
        .collect()
}

fn build_subtree(
    rows: &[FlatNode],
    children_of: &HashMap<&str, Vec<usize>>,
    index: usize,
) -> TreeNode {
    let row = &rows[index];
    let children = children_of
        .get(row.id.as_str())
        .map(|indices| {
            indices
                .iter()
                .map(|&child| build_subtree(rows, children_of, child))
                .collect()
        })
        .unwrap_or_default();

    TreeNode {
        id: row.id.clone(),
        name: row.name.clone(),
        content: row.content.clone(),
        children,
    }
}
