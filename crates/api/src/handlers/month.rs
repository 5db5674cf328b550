//! Handler for the month/group sheet.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use classbook_core::error::CoreError;
use classbook_core::month::Month;
use classbook_core::types::DbId;
use classbook_db::repositories::MonthViewRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /month/{month}/{group_id}
///
/// Students, lessons and score titles of the group with per-student
/// attendance, totals, money owed and scores.
pub async fn view(
    State(state): State<AppState>,
    ValidPath((month, group_id)): ValidPath<(i64, DbId)>,
) -> AppResult<impl IntoResponse> {
    let month = Month::new(month)?;

    let view = MonthViewRepo::load(&state.pool, month, group_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Group",
            id: group_id,
        }))?;

    tracing::debug!(
        month = %month,
        group_id,
        students = view.rows.len(),
        lessons = view.lessons.len(),
        titles = view.titles.len(),
        "Month sheet loaded"
    );

    Ok(Json(DataResponse { data: view }))
}
