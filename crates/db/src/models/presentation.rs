//! Presentation model: a single talk entry eligible for votes within a week.

use podium_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `presentations` table.
///
/// `votes` is the denormalized counter; every operation that touches vote
/// rows updates it in the same transaction, so it always equals the number
/// of `votes` rows referencing this presentation.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Presentation {
    pub id: DbId,
    pub week_id: String,
    pub title: String,
    pub presenter: String,
    pub votes: i32,
    pub created_at: Timestamp,
}

/// Request body for adding a presentation to a week.
#[derive(Debug, Deserialize)]
pub struct CreatePresentation {
    pub week_id: Option<String>,
    pub title: Option<String>,
    pub presenter: Option<String>,
}
