//! Repository for the `attendance` table.

use classbook_core::month::Month;
use classbook_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::attendance::Attendance;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, lesson_id, present";

pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Flip presence for a (student, lesson) pair.
    ///
    /// The first toggle creates the record as present; later toggles negate
    /// it in place. Never deletes. Returns the row after the flip.
    pub async fn toggle(
        pool: &SqlitePool,
        student_id: DbId,
        lesson_id: DbId,
    ) -> Result<Attendance, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance (student_id, lesson_id, present) VALUES ($1, $2, 1) \
             ON CONFLICT (student_id, lesson_id) DO UPDATE \
                SET present = CASE WHEN attendance.present = 0 THEN 1 ELSE 0 END \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendance>(&query)
            .bind(student_id)
            .bind(lesson_id)
            .fetch_one(pool)
            .await
    }

    /// All attendance records on the lessons of a group in a month.
    pub async fn list_for_group(
        pool: &SqlitePool,
        month: Month,
        group_id: DbId,
    ) -> Result<Vec<Attendance>, sqlx::Error> {
        sqlx::query_as::<_, Attendance>(
            "SELECT a.id, a.student_id, a.lesson_id, a.present \
             FROM attendance a \
             JOIN lessons l ON l.id = a.lesson_id \
             WHERE l.month = $1 AND l.group_id = $2",
        )
        .bind(month.get())
        .bind(group_id)
        .fetch_all(pool)
        .await
    }
}
