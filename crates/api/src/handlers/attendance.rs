//! Handler for flipping attendance marks.

use axum::extract::State;
use axum::Json;
use classbook_core::error::CoreError;
use classbook_core::types::DbId;
use classbook_db::repositories::{AttendanceRepo, LessonRepo, StudentRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::response::OkResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub student_id: DbId,
    pub lesson_id: DbId,
}

/// POST /toggle
///
/// The first toggle marks the student present; each later toggle flips
/// the stored mark.
pub async fn toggle(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<ToggleRequest>,
) -> AppResult<Json<OkResponse>> {
    let student = StudentRepo::find_by_id(&state.pool, input.student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: input.student_id,
        }))?;
    let lesson = LessonRepo::find_by_id(&state.pool, input.lesson_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id: input.lesson_id,
        }))?;

    if student.group_id != lesson.group_id || student.month != lesson.month {
        return Err(AppError::Core(CoreError::Validation(format!(
            "student {} and lesson {} belong to different groups",
            student.id, lesson.id
        ))));
    }

    let mark = AttendanceRepo::toggle(&state.pool, student.id, lesson.id).await?;

    tracing::info!(
        student_id = mark.student_id,
        lesson_id = mark.lesson_id,
        present = mark.present,
        "Attendance toggled"
    );

    Ok(Json(OkResponse::ok()))
}
