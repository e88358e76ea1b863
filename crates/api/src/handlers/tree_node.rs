//! Handlers for the tree routes nested under a journey.

use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use wayfarer_core::tree;
use wayfarer_core::types::{DbId, NodeId};
use wayfarer_db::models::tree_node::{CreateTreeNode, TreeNode};
use wayfarer_db::repositories::{JourneyRepo, TreeNodeRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path};
use crate::handlers::require_name;
use crate::state::AppState;

/// Request body for node creation. `name` is optional for the same
/// reason as on journeys: a missing field must report 400, not a JSON
/// extraction failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNodeBody {
    pub name: Option<String>,
    pub content: Option<String>,
    pub parent_id: Option<NodeId>,
}

/// GET /api/journeys/{id}/tree
///
/// Materializes the journey's flat rows into a nested forest. Sibling
/// order is creation order; rows whose parent no longer resolves are
/// surfaced as roots rather than dropped.
pub async fn get_tree(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<tree::TreeNode>>> {
    ensure_journey_exists(&state, id).await?;

    let rows = TreeNodeRepo::list_by_journey(&state.pool, id).await?;
    let forest = tree::materialize(rows.into_iter().map(Into::into).collect());
    Ok(Json(forest))
}

/// POST /api/journeys/{id}/tree/nodes
pub async fn add_node(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<AddNodeBody>,
) -> AppResult<(StatusCode, Json<TreeNode>)> {
    let name = require_name(body.name)?;
    ensure_journey_exists(&state, id).await?;

    // A declared parent must exist and belong to this journey. A
    // parent in another journey is a validation error, not a 404;
    // the client referenced something it cannot attach to.
    if let Some(parent_id) = &body.parent_id {
        let parent = TreeNodeRepo::find_by_id(&state.pool, parent_id).await?;
        match parent {
            Some(parent) if parent.journey_id == id => {}
            _ => return Err(AppError::validation("invalid parent")),
        }
    }

    let input = CreateTreeNode {
        name,
        content: body.content,
        parent_id: body.parent_id,
    };
    let node = TreeNodeRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(node)))
}

/// DELETE /api/journeys/{id}/tree/nodes/{node_id}
///
/// The delete is scoped to the journey in the path: a node id that
/// exists under a different journey reports 404, never success.
/// Descendants of the deleted node are removed by the schema's
/// cascading constraint.
pub async fn delete_node(
    State(state): State<AppState>,
    Path((id, node_id)): Path<(DbId, NodeId)>,
) -> AppResult<StatusCode> {
    ensure_journey_exists(&state, id).await?;

    let deleted = TreeNodeRepo::delete_scoped(&state.pool, id, &node_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("TreeNode", node_id))
    }
}

async fn ensure_journey_exists(state: &AppState, id: DbId) -> AppResult<()> {
    JourneyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Journey", id))?;
    Ok(())
}
