//! Handlers for vote endpoints: casting, the has-voted check, and the
//! per-user vote listing.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use podium_core::error::CoreError;
use podium_core::types::DbId;
use podium_core::voting::validate_user_identifier;
use podium_db::models::vote::VoteRequest;
use podium_db::repositories::VoteRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Response body for the has-voted check.
#[derive(Debug, Serialize)]
pub struct HasVotedResponse {
    pub has_voted: bool,
}

/// Response body listing the presentations a user has voted for.
#[derive(Debug, Serialize)]
pub struct UserVotesResponse {
    pub voted_presentations: Vec<DbId>,
}

/// POST /presentations/{id}/vote
///
/// Cast a vote for a presentation. At most one vote per
/// `(presentation, user)` pair ever exists; a second attempt is rejected,
/// also under concurrent requests.
pub async fn cast_vote(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<VoteRequest>,
) -> AppResult<impl IntoResponse> {
    let user_identifier = input.user_identifier.as_deref().unwrap_or_default();
    validate_user_identifier(user_identifier).map_err(CoreError::InvalidInput)?;

    let presentation = match VoteRepo::cast(&state.pool, id, user_identifier).await {
        Ok(Some(presentation)) => presentation,
        Ok(None) => {
            return Err(CoreError::NotFound {
                entity: "Presentation",
                id,
            }
            .into());
        }
        Err(err) if podium_db::is_unique_violation(&err, "uq_votes_presentation_user") => {
            return Err(CoreError::AlreadyVoted {
                presentation_id: id,
            }
            .into());
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(
        presentation_id = id,
        votes = presentation.votes,
        "Vote cast"
    );

    Ok(Json(presentation))
}

/// POST /presentations/{id}/has-voted
///
/// Check whether the given user has voted for the presentation. An unknown
/// presentation id answers `false` rather than 404.
pub async fn has_voted(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<VoteRequest>,
) -> AppResult<impl IntoResponse> {
    let user_identifier = input.user_identifier.as_deref().unwrap_or_default();
    validate_user_identifier(user_identifier).map_err(CoreError::InvalidInput)?;

    let has_voted = VoteRepo::has_voted(&state.pool, id, user_identifier).await?;

    Ok(Json(HasVotedResponse { has_voted }))
}

/// GET /votes/{user_identifier}
///
/// List the ids of every presentation the user has voted for, across all
/// weeks.
pub async fn list_user_votes(
    State(state): State<AppState>,
    Path(user_identifier): Path<String>,
) -> AppResult<impl IntoResponse> {
    let voted_presentations =
        VoteRepo::list_presentations_by_user(&state.pool, &user_identifier).await?;

    Ok(Json(UserVotesResponse {
        voted_presentations,
    }))
}
