use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use podium_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and carries raw database errors
/// that slipped past handler-level translation. Implements [`IntoResponse`]
/// to produce consistent JSON error responses of the form
/// `{ "error": "..", "code": ".." }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `podium_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::InvalidInput(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone())
                }
                CoreError::DuplicateKey(msg) => {
                    (StatusCode::BAD_REQUEST, "DUPLICATE_KEY", msg.clone())
                }
                CoreError::AlreadyVoted { presentation_id } => (
                    StatusCode::BAD_REQUEST,
                    "ALREADY_VOTED",
                    format!("Already voted for presentation {presentation_id}"),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// Handlers translate the constraint violations they expect (duplicate week
/// key, double vote) into [`CoreError`] themselves; this fallback covers
/// what remains:
///
/// - `RowNotFound` maps to 404.
/// - A foreign key violation on `fk_votes_presentation` means the
///   presentation vanished mid-request, which is a 404 to the caller.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL foreign key violation: error code 23503
            if db_err.code().as_deref() == Some("23503")
                && db_err.constraint() == Some("fk_votes_presentation")
            {
                return (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    "Presentation not found".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
