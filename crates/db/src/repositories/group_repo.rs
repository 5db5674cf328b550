//! Repository for the `groups` table.

use classbook_core::month::Month;
use classbook_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::group::{CreateGroup, Group, GroupSummary};
use crate::repositories::GroupMasterRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, month, group_master_id";

/// Column list for `groups g JOIN group_master gm` queries.
const SUMMARY_COLUMNS: &str = "g.id, gm.name";

/// Provides CRUD operations for month-scoped groups.
pub struct GroupRepo;

impl GroupRepo {
    /// Resolve the group master by name and create the group for the month.
    ///
    /// Fails with a unique violation when the master already has a group in
    /// that month.
    pub async fn create(pool: &SqlitePool, input: &CreateGroup) -> Result<Group, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let master_id = GroupMasterRepo::resolve_in(&mut tx, &input.name).await?;

        let query = format!(
            "INSERT INTO groups (month, group_master_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let group = sqlx::query_as::<_, Group>(&query)
            .bind(input.month.get())
            .bind(master_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(group)
    }

    /// Find a group by ID, only if it belongs to `month`.
    pub async fn find_in_month(
        pool: &SqlitePool,
        id: DbId,
        month: Month,
    ) -> Result<Option<GroupSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} \
             FROM groups g \
             JOIN group_master gm ON gm.id = g.group_master_id \
             WHERE g.id = $1 AND g.month = $2"
        );
        sqlx::query_as::<_, GroupSummary>(&query)
            .bind(id)
            .bind(month.get())
            .fetch_optional(pool)
            .await
    }

    /// List the groups of a month in creation order.
    pub async fn list_for_month(
        pool: &SqlitePool,
        month: Month,
    ) -> Result<Vec<GroupSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} \
             FROM groups g \
             JOIN group_master gm ON gm.id = g.group_master_id \
             WHERE g.month = $1 \
             ORDER BY g.id"
        );
        sqlx::query_as::<_, GroupSummary>(&query)
            .bind(month.get())
            .fetch_all(pool)
            .await
    }

    /// Months that have at least one group, ascending.
    pub async fn list_months(pool: &SqlitePool) -> Result<Vec<i64>, sqlx::Error> {
        let rows: Vec<(i64,)> =
            sqlx::query_as("SELECT DISTINCT month FROM groups ORDER BY month")
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(m,)| m).collect())
    }

    /// Delete a group of `month` together with everything that hangs off it:
    /// attendance and scores of its students, lessons and titles, then the
    /// students, lessons and titles themselves.
    ///
    /// The group master and other months are untouched. Returns `false`
    /// (and changes nothing) if the group does not exist in that month.
    pub async fn delete(pool: &SqlitePool, id: DbId, month: Month) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM groups WHERE id = $1 AND month = $2")
                .bind(id)
                .bind(month.get())
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Ok(false);
        }

        let statements = [
            "DELETE FROM attendance \
             WHERE student_id IN (SELECT id FROM students WHERE group_id = $1) \
                OR lesson_id IN (SELECT id FROM lessons WHERE group_id = $1)",
            "DELETE FROM scores \
             WHERE student_id IN (SELECT id FROM students WHERE group_id = $1) \
                OR title_id IN (SELECT id FROM score_titles WHERE group_id = $1)",
            "DELETE FROM students WHERE group_id = $1",
            "DELETE FROM lessons WHERE group_id = $1",
            "DELETE FROM score_titles WHERE group_id = $1",
            "DELETE FROM groups WHERE id = $1",
        ];
        for sql in statements {
            sqlx::query(sql).bind(id).execute(&mut *tx).await?;
        }

        tx.commit().await?;
        Ok(true)
    }
}
