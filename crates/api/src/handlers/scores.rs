//! Handlers for score titles and per-student scores.

use axum::extract::State;
use axum::Json;
use classbook_core::error::CoreError;
use classbook_core::month::Month;
use classbook_core::types::DbId;
use classbook_core::validation;
use classbook_db::models::score::{CreateScoreTitle, SaveScore};
use classbook_db::repositories::{ScoreRepo, ScoreTitleRepo, StudentRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::handlers::ensure_group_in_month;
use crate::response::OkResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct AddScoreTitleRequest {
    pub month: i64,
    pub group_id: DbId,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveScoreRequest {
    pub student_id: DbId,
    pub title_id: DbId,
    pub score: f64,
}

#[derive(Debug, Deserialize)]
pub struct DeleteScoreTitleRequest {
    pub title_id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /add_score_title
pub async fn add_title(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<AddScoreTitleRequest>,
) -> AppResult<Json<OkResponse>> {
    let month = Month::new(input.month)?;
    let title = validation::normalize_title(&input.title)?;
    ensure_group_in_month(&state.pool, input.group_id, month).await?;

    let created = ScoreTitleRepo::create(
        &state.pool,
        &CreateScoreTitle {
            month,
            group_id: input.group_id,
            title,
        },
    )
    .await?;

    tracing::info!(
        title_id = created.id,
        group_id = created.group_id,
        month = %month,
        title = %created.title,
        "Score title added"
    );

    Ok(Json(OkResponse::ok()))
}

/// POST /save_score
///
/// Stores the score for a (student, title) pair, replacing any earlier one.
pub async fn save(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<SaveScoreRequest>,
) -> AppResult<Json<OkResponse>> {
    let student = StudentRepo::find_by_id(&state.pool, input.student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: input.student_id,
        }))?;
    let title = ScoreTitleRepo::find_by_id(&state.pool, input.title_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ScoreTitle",
            id: input.title_id,
        }))?;

    if student.group_id != title.group_id || student.month != title.month {
        return Err(AppError::Core(CoreError::Validation(format!(
            "student {} and score title {} belong to different groups",
            student.id, title.id
        ))));
    }

    let saved = ScoreRepo::save(
        &state.pool,
        &SaveScore {
            student_id: student.id,
            title_id: title.id,
            score: input.score,
        },
    )
    .await?;

    tracing::info!(
        student_id = saved.student_id,
        title_id = saved.title_id,
        score = saved.score,
        "Score saved"
    );

    Ok(Json(OkResponse::ok()))
}

/// POST /delete_score_title
///
/// Removes the title together with every score saved under it.
pub async fn delete_title(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<DeleteScoreTitleRequest>,
) -> AppResult<Json<OkResponse>> {
    if !ScoreTitleRepo::delete(&state.pool, input.title_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ScoreTitle",
            id: input.title_id,
        }));
    }

    tracing::info!(title_id = input.title_id, "Score title deleted");

    Ok(Json(OkResponse::ok()))
}
