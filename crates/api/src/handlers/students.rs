//! Handlers for enrolling and removing students.

use axum::extract::State;
use axum::response::Redirect;
use classbook_core::error::CoreError;
use classbook_core::month::Month;
use classbook_core::types::{DbId, Money};
use classbook_core::validation;
use classbook_db::models::student::CreateStudent;
use classbook_db::repositories::StudentRepo;
use serde::Deserialize;

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::extract::{ValidForm, ValidPath, ValidQuery};
use crate::handlers::{blank_as_none, ensure_group_in_month, month_sheet_path};
use crate::state::AppState;

/// Form body of `POST /add_student`.
#[derive(Debug, Deserialize)]
pub struct AddStudentForm {
    pub name: String,
    pub fee: Money,
    pub month: i64,
    pub group_id: DbId,
}

/// Query string of `GET /delete_student_select/...`.
#[derive(Debug, Deserialize)]
pub struct DeleteStudentParams {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub student_id: Option<DbId>,
}

/// POST /add_student
pub async fn add(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<AddStudentForm>,
) -> AppResult<Redirect> {
    let month = Month::new(form.month)?;
    let name = validation::normalize_name("name", &form.name)?;
    validation::validate_fee(form.fee)?;
    ensure_group_in_month(&state.pool, form.group_id, month).await?;

    let input = CreateStudent {
        name,
        fee: form.fee,
        month,
        group_id: form.group_id,
    };
    let student = StudentRepo::create(&state.pool, &input)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::Core(CoreError::Conflict(format!(
                    "student '{}' is already enrolled in group {} for month {month}",
                    input.name, input.group_id
                )))
            } else {
                AppError::Database(err)
            }
        })?;

    tracing::info!(
        student_id = student.id,
        student_master_id = student.student_master_id,
        group_id = student.group_id,
        month = %month,
        fee = student.fee,
        "Student added"
    );

    Ok(Redirect::to(&month_sheet_path(month, form.group_id)))
}

/// GET /delete_student_select/{month}/{group_id}?student_id=
///
/// Without a `student_id` nothing is deleted.
pub async fn delete_selected(
    State(state): State<AppState>,
    ValidPath((month, group_id)): ValidPath<(i64, DbId)>,
    ValidQuery(params): ValidQuery<DeleteStudentParams>,
) -> AppResult<Redirect> {
    let month = Month::new(month)?;
    let target = month_sheet_path(month, group_id);

    let Some(student_id) = params.student_id else {
        return Ok(Redirect::to(&target));
    };

    if !StudentRepo::delete(&state.pool, student_id, month, group_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: student_id,
        }));
    }

    tracing::info!(student_id, group_id, month = %month, "Student deleted");

    Ok(Redirect::to(&target))
}
