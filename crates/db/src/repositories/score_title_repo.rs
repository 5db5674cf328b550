//! Repository for the `score_titles` table.

use classbook_core::month::Month;
use classbook_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::score::{CreateScoreTitle, ScoreTitle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, month, group_id, title";

pub struct ScoreTitleRepo;

impl ScoreTitleRepo {
    /// Insert a new score title, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateScoreTitle,
    ) -> Result<ScoreTitle, sqlx::Error> {
        let query = format!(
            "INSERT INTO score_titles (month, group_id, title) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScoreTitle>(&query)
            .bind(input.month.get())
            .bind(input.group_id)
            .bind(&input.title)
            .fetch_one(pool)
            .await
    }

    /// Find a score title by its internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<ScoreTitle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM score_titles WHERE id = $1");
        sqlx::query_as::<_, ScoreTitle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the score titles of a group in a month, in creation order.
    pub async fn list_for_group(
        pool: &SqlitePool,
        month: Month,
        group_id: DbId,
    ) -> Result<Vec<ScoreTitle>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM score_titles \
             WHERE month = $1 AND group_id = $2 \
             ORDER BY id"
        );
        sqlx::query_as::<_, ScoreTitle>(&query)
            .bind(month.get())
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a score title and every score saved under it.
    ///
    /// Returns `false` if the title does not exist.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM scores WHERE title_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM score_titles WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
