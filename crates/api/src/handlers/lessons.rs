//! Handlers for scheduling and removing lessons.

use axum::extract::State;
use axum::response::Redirect;
use chrono::NaiveDate;
use classbook_core::error::CoreError;
use classbook_core::month::Month;
use classbook_core::types::DbId;
use classbook_db::models::lesson::CreateLesson;
use classbook_db::repositories::LessonRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidForm, ValidPath, ValidQuery};
use crate::handlers::{blank_as_none, ensure_group_in_month, month_sheet_path};
use crate::state::AppState;

/// Form body of `POST /add_lesson`. `lesson_date` is `YYYY-MM-DD`.
#[derive(Debug, Deserialize)]
pub struct AddLessonForm {
    pub month: i64,
    pub group_id: DbId,
    pub lesson_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct DeleteLessonParams {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub lesson_id: Option<DbId>,
}

/// POST /add_lesson
pub async fn add(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<AddLessonForm>,
) -> AppResult<Redirect> {
    let month = Month::new(form.month)?;
    ensure_group_in_month(&state.pool, form.group_id, month).await?;

    let input = CreateLesson {
        month,
        group_id: form.group_id,
        lesson_date: form.lesson_date,
    };
    let lesson = LessonRepo::create(&state.pool, &input).await?;

    tracing::info!(
        lesson_id = lesson.id,
        group_id = lesson.group_id,
        month = %month,
        lesson_date = %lesson.lesson_date,
        "Lesson added"
    );

    Ok(Redirect::to(&month_sheet_path(month, form.group_id)))
}

/// GET /delete_lesson_select/{month}/{group_id}?lesson_id=
pub async fn delete_selected(
    State(state): State<AppState>,
    ValidPath((month, group_id)): ValidPath<(i64, DbId)>,
    ValidQuery(params): ValidQuery<DeleteLessonParams>,
) -> AppResult<Redirect> {
    let month = Month::new(month)?;
    let target = month_sheet_path(month, group_id);

    let Some(lesson_id) = params.lesson_id else {
        return Ok(Redirect::to(&target));
    };

    if !LessonRepo::delete(&state.pool, lesson_id, month, group_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id: lesson_id,
        }));
    }

    tracing::info!(lesson_id, group_id, month = %month, "Lesson deleted");

    Ok(Redirect::to(&target))
}
