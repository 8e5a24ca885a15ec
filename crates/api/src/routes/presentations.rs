//! Route definitions for presentation endpoints.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::presentations;
use crate::state::AppState;

/// Presentation routes.
///
/// ```text
/// POST   /presentations       -> add_presentation
/// DELETE /presentations/{id}  -> remove_presentation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/presentations", post(presentations::add_presentation))
        .route(
            "/presentations/{id}",
            delete(presentations::remove_presentation),
        )
}
