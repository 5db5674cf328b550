//! Handler for the landing page data.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use classbook_db::repositories::GroupRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct IndexPage {
    /// Months that have at least one group.
    pub months: Vec<i64>,
    pub version: &'static str,
}

/// GET /
pub async fn index(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let months = GroupRepo::list_months(&state.pool).await?;
    Ok(Json(DataResponse {
        data: IndexPage {
            months,
            version: env!("CARGO_PKG_VERSION"),
        },
    }))
}
