//! Repository for the `votes` table, including the vote-cast transaction.

use podium_core::types::DbId;
use sqlx::PgPool;

use crate::models::presentation::Presentation;
use crate::models::vote::Vote;

/// Column list for votes queries.
const COLUMNS: &str = "id, presentation_id, user_identifier, voted_at";

/// Column list for the presentation returned by a cast.
const PRESENTATION_COLUMNS: &str = "id, week_id, title, presenter, votes, created_at";

/// Provides vote casting and lookup operations.
pub struct VoteRepo;

impl VoteRepo {
    /// Cast a vote: increment the presentation's counter and insert the vote
    /// row in one transaction, returning the updated presentation.
    ///
    /// The `UPDATE .. RETURNING` runs first and takes the presentation row
    /// lock, serializing concurrent casts, resets, and deletes on the same
    /// presentation. Returns `Ok(None)` when the presentation does not
    /// exist. A duplicate `(presentation_id, user_identifier)` pair fails
    /// the insert with a `uq_votes_presentation_user` unique violation,
    /// rolling back the increment with it.
    pub async fn cast(
        pool: &PgPool,
        presentation_id: DbId,
        user_identifier: &str,
    ) -> Result<Option<Presentation>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE presentations SET votes = votes + 1
             WHERE id = $1
             RETURNING {PRESENTATION_COLUMNS}"
        );
        let presentation = sqlx::query_as::<_, Presentation>(&query)
            .bind(presentation_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(presentation) = presentation else {
            return Ok(None);
        };

        sqlx::query("INSERT INTO votes (presentation_id, user_identifier) VALUES ($1, $2)")
            .bind(presentation_id)
            .bind(user_identifier)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(presentation))
    }

    /// True iff the user has a vote for the presentation. A nonexistent
    /// presentation yields `false` rather than an error.
    pub async fn has_voted(
        pool: &PgPool,
        presentation_id: DbId,
        user_identifier: &str,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                 SELECT 1 FROM votes
                 WHERE presentation_id = $1 AND user_identifier = $2
             )",
        )
        .bind(presentation_id)
        .bind(user_identifier)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Presentation ids the user has voted for, across all weeks, in casting
    /// order.
    pub async fn list_presentations_by_user(
        pool: &PgPool,
        user_identifier: &str,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT presentation_id FROM votes WHERE user_identifier = $1 ORDER BY id ASC")
            .bind(user_identifier)
            .fetch_all(pool)
            .await
    }

    /// List a presentation's votes, oldest first.
    pub async fn list_by_presentation(
        pool: &PgPool,
        presentation_id: DbId,
    ) -> Result<Vec<Vote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM votes WHERE presentation_id = $1 ORDER BY voted_at ASC, id ASC"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(presentation_id)
            .fetch_all(pool)
            .await
    }
}
