//! Repository for the `weeks` table.

use sqlx::PgPool;

use crate::models::week::Week;

/// Column list for weeks queries.
const COLUMNS: &str = "id, week_id, created_at";

/// Provides operations over week rows, including the week-scoped vote reset.
pub struct WeekRepo;

impl WeekRepo {
    /// List all weeks, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Week>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weeks ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, Week>(&query).fetch_all(pool).await
    }

    /// Find a week by its human-readable key.
    pub async fn find_by_key(pool: &PgPool, week_id: &str) -> Result<Option<Week>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weeks WHERE week_id = $1");
        sqlx::query_as::<_, Week>(&query)
            .bind(week_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new week, returning the created row.
    ///
    /// A taken key surfaces as a `uq_weeks_week_id` unique violation.
    pub async fn create(pool: &PgPool, week_id: &str) -> Result<Week, sqlx::Error> {
        let query = format!("INSERT INTO weeks (week_id) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Week>(&query)
            .bind(week_id)
            .fetch_one(pool)
            .await
    }

    /// Delete a week, its presentations, and their votes in one transaction.
    /// Returns `true` if the week existed.
    ///
    /// No HTTP endpoint exposes this; it exists for the store's cascade
    /// contract and is exercised by tests.
    pub async fn delete(pool: &PgPool, week_id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "DELETE FROM votes WHERE presentation_id IN
                 (SELECT id FROM presentations WHERE week_id = $1)",
        )
        .bind(week_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM presentations WHERE week_id = $1")
            .bind(week_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM weeks WHERE week_id = $1")
            .bind(week_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every vote in a week and zero the denormalized counters, all in
    /// one transaction. Returns the number of presentations reset.
    ///
    /// The counter update runs first: it takes the presentation row locks, so
    /// a concurrent vote on the same week either commits before the reset
    /// (and is wiped with the rest) or waits and lands after it. Succeeds as
    /// a no-op when the week is unknown or has no presentations.
    pub async fn reset_votes(pool: &PgPool, week_id: &str) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("UPDATE presentations SET votes = 0 WHERE week_id = $1")
            .bind(week_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "DELETE FROM votes WHERE presentation_id IN
                 (SELECT id FROM presentations WHERE week_id = $1)",
        )
        .bind(week_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
