//! Tree node entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wayfarer_core::tree::FlatNode;
use wayfarer_core::types::{DbId, NodeId, Timestamp};

/// A tree node row from the `tree_nodes` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: NodeId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub journey_id: DbId,
    pub parent_id: Option<NodeId>,
    pub created_at: Timestamp,
}

impl From<TreeNode> for FlatNode {
    fn from(row: TreeNode) -> Self {
        FlatNode {
            id: row.id,
            name: row.name,
            content: row.content,
            parent_id: row.parent_id,
        }
    }
}

/// DTO for creating a node under a journey. `parent_id` of `None`
/// creates a root node. Parent existence and same-journey ownership
/// are checked at the API layer before insert.
#[derive(Debug, Clone)]
pub struct CreateTreeNode {
    pub name: String,
    pub content: Option<String>,
    pub parent_id: Option<NodeId>,
}
