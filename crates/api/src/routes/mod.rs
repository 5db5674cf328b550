pub mod groups;
pub mod health;
pub mod marks;
pub mod sheet;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree (mounted at the root, no version prefix).
///
/// ```text
/// GET  /                                               landing data
///
/// GET  /groups/{month}                                 list groups
/// POST /add_group                                      create group (form)
/// GET  /delete_group/{group_id}/{month}                delete group
/// GET  /copy_month/{month}                             copy previous month
///
/// GET  /month/{month}/{group_id}                       month sheet
/// POST /add_student                                    enrol student (form)
/// GET  /delete_student_select/{month}/{group_id}       delete student (?student_id)
/// POST /add_lesson                                     add lesson (form)
/// GET  /delete_lesson_select/{month}/{group_id}        delete lesson (?lesson_id)
///
/// POST /toggle                                         flip attendance (JSON)
/// POST /add_score_title                                add score title (JSON)
/// POST /save_score                                     upsert score (JSON)
/// POST /delete_score_title                             delete score title (JSON)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index::index))
        .merge(groups::router())
        .merge(sheet::router())
        .merge(marks::router())
}
