//! Week model: a named batch period grouping presentations for voting.

use podium_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::presentation::Presentation;

/// A row from the `weeks` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Week {
    pub id: DbId,
    /// Human-readable unique key, e.g. "2025-W42".
    pub week_id: String,
    pub created_at: Timestamp,
}

/// Request body for creating a week explicitly.
#[derive(Debug, Deserialize)]
pub struct CreateWeek {
    pub week_id: Option<String>,
}

/// One entry in the week listing: a week's presentations, oldest first.
#[derive(Debug, Serialize)]
pub struct WeekPresentations {
    pub presentations: Vec<Presentation>,
}
