//! Handlers for presentation endpoints: adding and removing talks.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use podium_core::error::CoreError;
use podium_core::types::DbId;
use podium_core::voting::{validate_presenter, validate_title, validate_week_key};
use podium_db::models::presentation::CreatePresentation;
use podium_db::repositories::PresentationRepo;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /presentations
///
/// Add a presentation to a week, creating the week implicitly when its key
/// is not yet known. This is the only endpoint that can create a week as a
/// side effect.
pub async fn add_presentation(
    State(state): State<AppState>,
    Json(input): Json<CreatePresentation>,
) -> AppResult<impl IntoResponse> {
    let week_id = input.week_id.as_deref().unwrap_or_default();
    let title = input.title.as_deref().unwrap_or_default();
    let presenter = input.presenter.as_deref().unwrap_or_default();

    validate_week_key(week_id).map_err(CoreError::InvalidInput)?;
    validate_title(title).map_err(CoreError::InvalidInput)?;
    validate_presenter(presenter).map_err(CoreError::InvalidInput)?;

    let presentation = PresentationRepo::create(&state.pool, week_id, title, presenter).await?;

    tracing::info!(
        presentation_id = presentation.id,
        week_id = %presentation.week_id,
        presenter = %presentation.presenter,
        "Presentation added"
    );

    Ok((StatusCode::CREATED, Json(presentation)))
}

/// DELETE /presentations/{id}
///
/// Remove a presentation and all its votes. Removing an unknown id is a
/// genuine 404, also on a repeated delete.
pub async fn remove_presentation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PresentationRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Presentation",
            id,
        }
        .into());
    }

    tracing::info!(presentation_id = id, "Presentation deleted");

    Ok(Json(MessageResponse {
        message: "Presentation deleted",
    }))
}
