//! Vote model: one user's single ballot for one presentation.

use podium_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `votes` table.
///
/// The pair `(presentation_id, user_identifier)` is unique
/// (`uq_votes_presentation_user`).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vote {
    pub id: DbId,
    pub presentation_id: DbId,
    /// Opaque caller-supplied token (browser fingerprint or session ID).
    pub user_identifier: String,
    pub voted_at: Timestamp,
}

/// Request body for casting a vote or checking vote status.
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub user_identifier: Option<String>,
}
