//! Repository for the `students` table.

use classbook_core::month::Month;
use classbook_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::student::{CreateStudent, Student, StudentWithName};
use crate::repositories::StudentMasterRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_master_id, fee, month, group_id";

/// Column list for `students s JOIN student_master sm` queries.
const NAMED_COLUMNS: &str = "s.id, s.student_master_id, sm.name, s.fee, s.month, s.group_id";

/// Provides CRUD operations for month/group enrolments.
pub struct StudentRepo;

impl StudentRepo {
    /// Resolve the student master by name and enrol it in the group.
    ///
    /// Fails with a unique violation when the same student is already
    /// enrolled in that group for the month.
    pub async fn create(pool: &SqlitePool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let master_id = StudentMasterRepo::resolve_in(&mut tx, &input.name).await?;

        let query = format!(
            "INSERT INTO students (student_master_id, fee, month, group_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let student = sqlx::query_as::<_, Student>(&query)
            .bind(master_id)
            .bind(input.fee)
            .bind(input.month.get())
            .bind(input.group_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(student)
    }

    /// Find a student row by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the students of a group in a month, in enrolment order.
    pub async fn list_for_group(
        pool: &SqlitePool,
        month: Month,
        group_id: DbId,
    ) -> Result<Vec<StudentWithName>, sqlx::Error> {
        let query = format!(
            "SELECT {NAMED_COLUMNS} \
             FROM students s \
             JOIN student_master sm ON sm.id = s.student_master_id \
             WHERE s.month = $1 AND s.group_id = $2 \
             ORDER BY s.id"
        );
        sqlx::query_as::<_, StudentWithName>(&query)
            .bind(month.get())
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a student of the given group/month with its attendance and scores.
    ///
    /// Returns `false` (and changes nothing) if no such student exists there.
    pub async fn delete(
        pool: &SqlitePool,
        id: DbId,
        month: Month,
        group_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM students WHERE id = $1 AND month = $2 AND group_id = $3",
        )
        .bind(id)
        .bind(month.get())
        .bind(group_id)
        .fetch_optional(&mut *tx)
        .await?;
        if exists.is_none() {
            return Ok(false);
        }

        sqlx::query("DELETE FROM attendance WHERE student_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM scores WHERE student_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
