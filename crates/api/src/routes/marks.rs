//! Route definitions for the JSON endpoints that record attendance and scores.

use axum::routing::post;
use axum::Router;

use crate::handlers::{attendance, scores};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/toggle", post(attendance::toggle))
        .route("/add_score_title", post(scores::add_title))
        .route("/save_score", post(scores::save))
        .route("/delete_score_title", post(scores::delete_title))
}
