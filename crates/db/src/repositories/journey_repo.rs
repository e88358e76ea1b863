//! Repository for the `journeys` table.

use chrono::Utc;
use wayfarer_core::types::DbId;

use crate::models::journey::{CreateJourney, Journey, RenameJourney};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for journeys.
pub struct JourneyRepo;

impl JourneyRepo {
    /// Insert a new journey, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateJourney) -> Result<Journey, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO journeys (name, created_at, updated_at)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Journey>(&query)
            .bind(&input.name)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// List all journeys in creation order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Journey>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM journeys ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, Journey>(&query).fetch_all(pool).await
    }

    /// Find a journey by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Journey>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM journeys WHERE id = ?1");
        sqlx::query_as::<_, Journey>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Rename a journey, bumping `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn rename(
        pool: &DbPool,
        id: DbId,
        input: &RenameJourney,
    ) -> Result<Option<Journey>, sqlx::Error> {
        let query = format!(
            "UPDATE journeys SET name = ?2, updated_at = ?3
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Journey>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a journey by ID. Returns `true` if a row was removed.
    /// The schema cascades the delete to the journey's tree nodes.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM journeys WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
