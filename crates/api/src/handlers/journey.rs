//! Handlers for the `/api/journeys` resource.

use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use wayfarer_core::types::DbId;
use wayfarer_db::models::journey::{CreateJourney, Journey, RenameJourney};
use wayfarer_db::repositories::JourneyRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path};
use crate::handlers::require_name;
use crate::state::AppState;

/// Request body for create and rename. `name` is optional here so a
/// missing field reaches [`require_name`] and reports 400 rather than
/// failing JSON extraction.
#[derive(Debug, Deserialize)]
pub struct JourneyNameBody {
    pub name: Option<String>,
}

/// POST /api/journeys
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<JourneyNameBody>,
) -> AppResult<(StatusCode, Json<Journey>)> {
    let name = require_name(body.name)?;
    let journey = JourneyRepo::create(&state.pool, &CreateJourney { name }).await?;
    Ok((StatusCode::CREATED, Json(journey)))
}

/// GET /api/journeys
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Journey>>> {
    let journeys = JourneyRepo::list(&state.pool).await?;
    Ok(Json(journeys))
}

/// GET /api/journeys/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Journey>> {
    let journey = JourneyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Journey", id))?;
    Ok(Json(journey))
}

/// PUT /api/journeys/{id}
pub async fn rename(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<JourneyNameBody>,
) -> AppResult<Json<Journey>> {
    let name = require_name(body.name)?;
    let journey = JourneyRepo::rename(&state.pool, id, &RenameJourney { name })
        .await?
        .ok_or(AppError::not_found("Journey", id))?;
    Ok(Json(journey))
}

/// DELETE /api/journeys/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = JourneyRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Journey", id))
    }
}
