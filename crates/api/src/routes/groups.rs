//! Route definitions for month-scoped groups.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::groups;
use crate::state::AppState;

/// ```text
/// GET  /groups/{month}                    -> list
/// POST /add_group                         -> add
/// GET  /delete_group/{group_id}/{month}   -> delete
/// GET  /copy_month/{month}                -> copy_month
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/groups/{month}", get(groups::list))
        .route("/add_group", post(groups::add))
        .route("/delete_group/{group_id}/{month}", get(groups::delete))
        .route("/copy_month/{month}", get(groups::copy_month))
}
