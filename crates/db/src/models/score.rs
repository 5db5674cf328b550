//! Score titles (columns of the score sheet) and per-student scores.

use classbook_core::month::Month;
use classbook_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `score_titles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScoreTitle {
    pub id: DbId,
    pub month: i64,
    pub group_id: DbId,
    pub title: String,
}

/// DTO for adding a score title to a group/month.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScoreTitle {
    pub month: Month,
    pub group_id: DbId,
    pub title: String,
}

/// A row from the `scores` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Score {
    pub id: DbId,
    pub student_id: DbId,
    pub title_id: DbId,
    pub score: f64,
}

/// DTO for saving a score; inserts or overwrites the (student, title) row.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveScore {
    pub student_id: DbId,
    pub title_id: DbId,
    pub score: f64,
}
