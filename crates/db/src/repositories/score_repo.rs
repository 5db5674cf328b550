//! Repository for the `scores` table.

use classbook_core::month::Month;
use classbook_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::score::{SaveScore, Score};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, title_id, score";

pub struct ScoreRepo;

impl ScoreRepo {
    /// Insert the score for a (student, title) pair, or overwrite the
    /// existing one. Returns the stored row.
    pub async fn save(pool: &SqlitePool, input: &SaveScore) -> Result<Score, sqlx::Error> {
        let query = format!(
            "INSERT INTO scores (student_id, title_id, score) VALUES ($1, $2, $3) \
             ON CONFLICT (student_id, title_id) DO UPDATE SET score = excluded.score \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Score>(&query)
            .bind(input.student_id)
            .bind(input.title_id)
            .bind(input.score)
            .fetch_one(pool)
            .await
    }

    /// All scores saved under the titles of a group in a month.
    pub async fn list_for_group(
        pool: &SqlitePool,
        month: Month,
        group_id: DbId,
    ) -> Result<Vec<Score>, sqlx::Error> {
        sqlx::query_as::<_, Score>(
            "SELECT sc.id, sc.student_id, sc.title_id, sc.score \
             FROM scores sc \
             JOIN score_titles t ON t.id = sc.title_id \
             WHERE t.month = $1 AND t.group_id = $2",
        )
        .bind(month.get())
        .bind(group_id)
        .fetch_all(pool)
        .await
    }
}
