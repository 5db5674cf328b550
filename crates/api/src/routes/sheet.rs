//! Route definitions for the month sheet and its students and lessons.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{lessons, month, students};
use crate::state::AppState;

/// ```text
/// GET  /month/{month}/{group_id}                    -> month::view
/// POST /add_student                                 -> students::add
/// GET  /delete_student_select/{month}/{group_id}    -> students::delete_selected
/// POST /add_lesson                                  -> lessons::add
/// GET  /delete_lesson_select/{month}/{group_id}     -> lessons::delete_selected
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/month/{month}/{group_id}", get(month::view))
        .route("/add_student", post(students::add))
        .route(
            "/delete_student_select/{month}/{group_id}",
            get(students::delete_selected),
        )
        .route("/add_lesson", post(lessons::add))
        .route(
            "/delete_lesson_select/{month}/{group_id}",
            get(lessons::delete_selected),
        )
}
