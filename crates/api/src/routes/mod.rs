pub mod health;
pub mod presentations;
pub mod votes;
pub mod weeks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /weeks                              list (GET), create (POST)
/// /weeks/{week_id}/reset-votes        reset a week's votes (POST)
///
/// /presentations                      add (POST)
/// /presentations/{id}                 remove (DELETE)
/// /presentations/{id}/vote            cast a vote (POST)
/// /presentations/{id}/has-voted       vote status for a user (POST)
///
/// /votes/{user_identifier}            presentations a user voted for (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(weeks::router())
        .merge(presentations::router())
        .merge(votes::router())
}
