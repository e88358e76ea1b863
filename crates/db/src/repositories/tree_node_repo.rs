//! Repository for the `tree_nodes` table.

use chrono::Utc;
use uuid::Uuid;
use wayfarer_core::types::DbId;

use crate::models::tree_node::{CreateTreeNode, TreeNode};
use crate::DbPool;

const COLUMNS: &str = "id, name, content, journey_id, parent_id, created_at";

/// Provides CRUD operations for tree nodes.
pub struct TreeNodeRepo;

impl TreeNodeRepo {
    /// Insert a new node under `journey_id`, returning the created row.
    ///
    /// Ids are UUID v7, so a node's id is time-ordered like its
    /// `created_at`.
    pub async fn create(
        pool: &DbPool,
        journey_id: DbId,
        input: &CreateTreeNode,
    ) -> Result<TreeNode, sqlx::Error> {
        let id = Uuid::now_v7().to_string();
        let query = format!(
            "INSERT INTO tree_nodes (id, name, content, journey_id, parent_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TreeNode>(&query)
            .bind(&id)
            .bind(&input.name)
            .bind(&input.content)
            .bind(journey_id)
            .bind(&input.parent_id)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a node by its ID, regardless of owning journey. Used for
    /// the parent-ownership check on create.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<TreeNode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tree_nodes WHERE id = ?1");
        sqlx::query_as::<_, TreeNode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all nodes of one journey in sibling order: ascending
    /// `created_at`, UUID v7 id as the tiebreaker.
    pub async fn list_by_journey(
        pool: &DbPool,
        journey_id: DbId,
    ) -> Result<Vec<TreeNode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tree_nodes
             WHERE journey_id = ?1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, TreeNode>(&query)
            .bind(journey_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a node only if it belongs to `journey_id`. Returns
    /// `true` if a row was removed; a node owned by a different
    /// journey is left untouched. The schema cascades the delete to
    /// the node's entire subtree.
    pub async fn delete_scoped(
        pool: &DbPool,
        journey_id: DbId,
        node_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tree_nodes WHERE id = ?1 AND journey_id = ?2")
            .bind(node_id)
            .bind(journey_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
