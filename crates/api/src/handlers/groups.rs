//! Handlers for month-scoped groups: listing, creation, deletion and the
//! month-to-month copy.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use classbook_core::error::CoreError;
use classbook_core::month::Month;
use classbook_core::types::DbId;
use classbook_core::validation;
use classbook_db::models::group::{CreateGroup, GroupSummary};
use classbook_db::repositories::{GroupRepo, MonthCopyRepo};
use serde::{Deserialize, Serialize};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::extract::{ValidForm, ValidPath};
use crate::handlers::group_list_path;
use crate::response::DataResponse;
use crate::state::AppState;

/// Form body of `POST /add_group`.
#[derive(Debug, Deserialize)]
pub struct AddGroupForm {
    pub name: String,
    pub month: i64,
}

#[derive(Debug, Serialize)]
pub struct GroupListPage {
    pub month: Month,
    pub groups: Vec<GroupSummary>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /groups/{month}
pub async fn list(
    State(state): State<AppState>,
    ValidPath(month): ValidPath<i64>,
) -> AppResult<impl IntoResponse> {
    let month = Month::new(month)?;
    let groups = GroupRepo::list_for_month(&state.pool, month).await?;

    tracing::debug!(count = groups.len(), month = %month, "Listed groups");

    Ok(Json(DataResponse {
        data: GroupListPage { month, groups },
    }))
}

/// POST /add_group
///
/// Resolves (or creates) the group master by name, then creates the group
/// for the month. A group with the same name already in that month is a
/// conflict.
pub async fn add(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<AddGroupForm>,
) -> AppResult<Redirect> {
    let month = Month::new(form.month)?;
    let name = validation::normalize_name("name", &form.name)?;

    let input = CreateGroup { name, month };
    let group = GroupRepo::create(&state.pool, &input)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::Core(CoreError::Conflict(format!(
                    "group '{}' already exists in month {month}",
                    input.name
                )))
            } else {
                AppError::Database(err)
            }
        })?;

    tracing::info!(
        group_id = group.id,
        group_master_id = group.group_master_id,
        month = %month,
        "Group created"
    );

    Ok(Redirect::to(&group_list_path(month)))
}

/// GET /delete_group/{group_id}/{month}
///
/// Removes the group with its students, lessons, score titles and their
/// attendance and scores. The group master survives.
pub async fn delete(
    State(state): State<AppState>,
    ValidPath((group_id, month)): ValidPath<(DbId, i64)>,
) -> AppResult<Redirect> {
    let month = Month::new(month)?;

    if !GroupRepo::delete(&state.pool, group_id, month).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Group",
            id: group_id,
        }));
    }

    tracing::info!(group_id, month = %month, "Group deleted");

    Ok(Redirect::to(&group_list_path(month)))
}

/// GET /copy_month/{month}
///
/// Carries the previous month's groups and students into `month`. Safe to
/// repeat; a no-op for the first month.
pub async fn copy_month(
    State(state): State<AppState>,
    ValidPath(month): ValidPath<i64>,
) -> AppResult<Redirect> {
    let month = Month::new(month)?;

    let report = MonthCopyRepo::copy_from_previous(&state.pool, month).await?;

    tracing::info!(
        month = %month,
        groups_created = report.groups_created,
        students_created = report.students_created,
        "Month copied from previous"
    );

    Ok(Redirect::to(&group_list_path(month)))
}
