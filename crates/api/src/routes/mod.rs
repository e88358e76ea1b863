pub mod health;
pub mod journey;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/journeys", journey::router())
}
