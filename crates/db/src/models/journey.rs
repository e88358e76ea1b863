//! Journey entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wayfarer_core::types::{DbId, Timestamp};

/// A journey row from the `journeys` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a journey. Name is validated (present, non-empty
/// after trimming) at the API layer before this reaches the store.
#[derive(Debug, Clone)]
pub struct CreateJourney {
    pub name: String,
}

/// DTO for renaming a journey.
#[derive(Debug, Clone)]
pub struct RenameJourney {
    pub name: String,
}
