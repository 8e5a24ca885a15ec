//! Handlers for week endpoints: listing, creation, and the week vote reset.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use podium_core::error::CoreError;
use podium_core::voting::validate_week_key;
use podium_db::models::week::{CreateWeek, WeekPresentations};
use podium_db::repositories::{PresentationRepo, WeekRepo};

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /weeks
///
/// List every week with its presentations, keyed by week key. Weeks without
/// presentations appear with an empty list.
pub async fn list_weeks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let weeks = WeekRepo::list(&state.pool).await?;
    let presentations = PresentationRepo::list_all(&state.pool).await?;

    let mut by_week: BTreeMap<String, WeekPresentations> = weeks
        .into_iter()
        .map(|week| {
            (
                week.week_id,
                WeekPresentations {
                    presentations: Vec::new(),
                },
            )
        })
        .collect();

    for presentation in presentations {
        if let Some(entry) = by_week.get_mut(&presentation.week_id) {
            entry.presentations.push(presentation);
        }
    }

    Ok(Json(by_week))
}

/// POST /weeks
///
/// Create a new week with an explicit key.
pub async fn create_week(
    State(state): State<AppState>,
    Json(input): Json<CreateWeek>,
) -> AppResult<impl IntoResponse> {
    let week_id = input.week_id.as_deref().unwrap_or_default();
    validate_week_key(week_id).map_err(CoreError::InvalidInput)?;

    let week = match WeekRepo::create(&state.pool, week_id).await {
        Ok(week) => week,
        Err(err) if podium_db::is_unique_violation(&err, "uq_weeks_week_id") => {
            return Err(CoreError::DuplicateKey(format!("Week {week_id} already exists")).into());
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(week_id = %week.week_id, "Week created");

    Ok((StatusCode::CREATED, Json(week)))
}

/// POST /weeks/{week_id}/reset-votes
///
/// Delete every vote in the week and zero the counters. Succeeds even when
/// the week is unknown or empty.
pub async fn reset_week_votes(
    State(state): State<AppState>,
    Path(week_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let reset = WeekRepo::reset_votes(&state.pool, &week_id).await?;

    tracing::info!(week_id = %week_id, presentations = reset, "Week votes reset");

    Ok(Json(MessageResponse {
        message: "Votes reset for week",
    }))
}
