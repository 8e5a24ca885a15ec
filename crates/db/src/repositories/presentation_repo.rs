//! Repository for the `presentations` table.

use podium_core::types::DbId;
use sqlx::PgPool;

use crate::models::presentation::Presentation;

/// Column list for presentations queries.
const COLUMNS: &str = "id, week_id, title, presenter, votes, created_at";

/// Provides operations over presentation rows.
pub struct PresentationRepo;

impl PresentationRepo {
    /// List all presentations across all weeks, ordered by week key then
    /// creation. Used to build the week listing in one query.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Presentation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM presentations ORDER BY week_id ASC, created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Presentation>(&query).fetch_all(pool).await
    }

    /// List a week's presentations, oldest first.
    pub async fn list_by_week(pool: &PgPool, week_id: &str) -> Result<Vec<Presentation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM presentations WHERE week_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Presentation>(&query)
            .bind(week_id)
            .fetch_all(pool)
            .await
    }

    /// Find a presentation by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Presentation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM presentations WHERE id = $1");
        sqlx::query_as::<_, Presentation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a presentation, implicitly creating its week when absent.
    ///
    /// The week upsert and the presentation insert share one transaction, so
    /// two concurrent calls naming the same new week cannot race: the
    /// `ON CONFLICT DO NOTHING` makes the second upsert a no-op rather than
    /// a unique violation.
    pub async fn create(
        pool: &PgPool,
        week_id: &str,
        title: &str,
        presenter: &str,
    ) -> Result<Presentation, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("INSERT INTO weeks (week_id) VALUES ($1) ON CONFLICT (week_id) DO NOTHING")
            .bind(week_id)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO presentations (week_id, title, presenter)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let presentation = sqlx::query_as::<_, Presentation>(&query)
            .bind(week_id)
            .bind(title)
            .bind(presenter)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(presentation)
    }

    /// Delete a presentation and all its votes in one transaction.
    /// Returns `true` if a row was deleted.
    ///
    /// The row is locked before the vote cleanup so a concurrent cast cannot
    /// insert a ballot between the vote delete and the row delete.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM presentations WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(false);
        }

        sqlx::query("DELETE FROM votes WHERE presentation_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM presentations WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
