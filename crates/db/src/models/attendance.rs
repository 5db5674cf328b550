use classbook_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `attendance` table.
///
/// Rows are created by the first toggle and flipped in place afterwards;
/// they are only removed together with their student or lesson.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attendance {
    pub id: DbId,
    pub student_id: DbId,
    pub lesson_id: DbId,
    pub present: bool,
}
