//! Carries groups and their students forward from one month to the next.

use classbook_core::month::Month;
use classbook_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::group::{CopyReport, Group};

pub struct MonthCopyRepo;

impl MonthCopyRepo {
    /// Copy every group of the previous month into `month`, and every
    /// student of each source group into the matching destination group
    /// with the same fee.
    ///
    /// Groups are matched on master identity, not row id. A group that
    /// already exists in `month` is skipped entirely, students included,
    /// so students removed after an earlier copy stay removed. Lessons,
    /// attendance, score titles and scores stay in the month they were
    /// recorded in.
    /// A no-op for the first month.
    pub async fn copy_from_previous(
        pool: &SqlitePool,
        month: Month,
    ) -> Result<CopyReport, sqlx::Error> {
        let Some(prev) = month.previous() else {
            return Ok(CopyReport::default());
        };

        let mut tx = pool.begin().await?;
        let mut report = CopyReport::default();

        let sources = sqlx::query_as::<_, Group>(
            "SELECT id, month, group_master_id FROM groups WHERE month = $1 ORDER BY id",
        )
        .bind(prev.get())
        .fetch_all(&mut *tx)
        .await?;

        for source in sources {
            // No row comes back when the group already exists in `month`;
            // such a group and its students are left as they are.
            let created: Option<(DbId,)> = sqlx::query_as(
                "INSERT INTO groups (month, group_master_id) VALUES ($1, $2) \
                 ON CONFLICT (month, group_master_id) DO NOTHING \
                 RETURNING id",
            )
            .bind(month.get())
            .bind(source.group_master_id)
            .fetch_optional(&mut *tx)
            .await?;
            let Some((dest_id,)) = created else {
                continue;
            };
            report.groups_created += 1;

            // The WHERE clause is required by SQLite's upsert grammar after
            // INSERT ... SELECT.
            let copied = sqlx::query(
                "INSERT INTO students (student_master_id, fee, month, group_id) \
                 SELECT student_master_id, fee, $1, $2 FROM students \
                 WHERE month = $3 AND group_id = $4 \
                 ON CONFLICT (month, group_id, student_master_id) DO NOTHING",
            )
            .bind(month.get())
            .bind(dest_id)
            .bind(prev.get())
            .bind(source.id)
            .execute(&mut *tx)
            .await?;
            report.students_created += copied.rows_affected();
        }

        tx.commit().await?;

        tracing::debug!(
            from = prev.get(),
            to = month.get(),
            groups_created = report.groups_created,
            students_created = report.students_created,
            "Copied month"
        );

        Ok(report)
    }
}
