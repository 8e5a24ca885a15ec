//! Route definitions for week endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::weeks;
use crate::state::AppState;

/// Week routes.
///
/// ```text
/// GET    /weeks                        -> list_weeks
/// POST   /weeks                        -> create_week
/// POST   /weeks/{week_id}/reset-votes  -> reset_week_votes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/weeks", get(weeks::list_weeks).post(weeks::create_week))
        .route("/weeks/{week_id}/reset-votes", post(weeks::reset_week_votes))
}
