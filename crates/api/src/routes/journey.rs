//! Route definitions for the `/journeys` resource, including the
//! tree routes nested under a journey.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{journey, tree_node};
use crate::state::AppState;

/// Routes mounted at `/api/journeys`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> rename
/// DELETE /{id}                      -> delete
///
/// GET    /{id}/tree                 -> materialized forest
/// POST   /{id}/tree/nodes           -> add_node
/// DELETE /{id}/tree/nodes/{node_id} -> delete_node
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(journey::list).post(journey::create))
        .route(
            "/{id}",
            get(journey::get_by_id)
                .put(journey::rename)
                .delete(journey::delete),
        )
        .route("/{id}/tree", get(tree_node::get_tree))
        .route("/{id}/tree/nodes", post(tree_node::add_node))
        .route(
            "/{id}/tree/nodes/{node_id}",
            delete(tree_node::delete_node),
        )
}
