use chrono::NaiveDate;
use classbook_core::month::Month;
use classbook_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `lessons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lesson {
    pub id: DbId,
    pub month: i64,
    pub group_id: DbId,
    pub lesson_date: NaiveDate,
}

/// DTO for scheduling a lesson.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLesson {
    pub month: Month,
    pub group_id: DbId,
    pub lesson_date: NaiveDate,
}
