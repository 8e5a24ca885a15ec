//! Route definitions for vote endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::votes;
use crate::state::AppState;

/// Vote routes.
///
/// ```text
/// POST /presentations/{id}/vote       -> cast_vote
/// POST /presentations/{id}/has-voted  -> has_voted
/// GET  /votes/{user_identifier}       -> list_user_votes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/presentations/{id}/vote", post(votes::cast_vote))
        .route("/presentations/{id}/has-voted", post(votes::has_voted))
        .route("/votes/{user_identifier}", get(votes::list_user_votes))
}
