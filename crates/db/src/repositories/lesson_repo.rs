//! Repository for the `lessons` table.

use classbook_core::month::Month;
use classbook_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::lesson::{CreateLesson, Lesson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, month, group_id, lesson_date";

pub struct LessonRepo;

impl LessonRepo {
    /// Insert a new lesson, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateLesson) -> Result<Lesson, sqlx::Error> {
        let query = format!(
            "INSERT INTO lessons (month, group_id, lesson_date) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(input.month.get())
            .bind(input.group_id)
            .bind(input.lesson_date)
            .fetch_one(pool)
            .await
    }

    /// Find a lesson by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lessons WHERE id = $1");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the lessons of a group in a month, ascending by date.
    ///
    /// Lessons on the same date keep their creation order.
    pub async fn list_for_group(
        pool: &SqlitePool,
        month: Month,
        group_id: DbId,
    ) -> Result<Vec<Lesson>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lessons \
             WHERE month = $1 AND group_id = $2 \
             ORDER BY lesson_date, id"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(month.get())
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a lesson of the given group/month and its attendance records.
    ///
    /// Returns `false` (and changes nothing) if no such lesson exists there.
    pub async fn delete(
        pool: &SqlitePool,
        id: DbId,
        month: Month,
        group_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM lessons WHERE id = $1 AND month = $2 AND group_id = $3",
        )
        .bind(id)
        .bind(month.get())
        .bind(group_id)
        .fetch_optional(&mut *tx)
        .await?;
        if exists.is_none() {
            return Ok(false);
        }

        sqlx::query("DELETE FROM attendance WHERE lesson_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM lessons WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
