//! Loads the month/group sheet.

use classbook_core::month::Month;
use classbook_core::roster::Roster;
use classbook_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::month_view::{MonthView, MonthViewRow};
use crate::repositories::{
    AttendanceRepo, GroupRepo, LessonRepo, ScoreRepo, ScoreTitleRepo, StudentRepo,
};

pub struct MonthViewRepo;

impl MonthViewRepo {
    /// Materialize the sheet for `group_id` in `month`.
    ///
    /// Issues a fixed number of queries regardless of group size and joins
    /// the overlay rows in memory. Returns `None` when the group does not
    /// exist in that month.
    pub async fn load(
        pool: &SqlitePool,
        month: Month,
        group_id: DbId,
    ) -> Result<Option<MonthView>, sqlx::Error> {
        let Some(group) = GroupRepo::find_in_month(pool, group_id, month).await? else {
            return Ok(None);
        };

        let groups = GroupRepo::list_for_month(pool, month).await?;
        let students = StudentRepo::list_for_group(pool, month, group_id).await?;
        let lessons = LessonRepo::list_for_group(pool, month, group_id).await?;
        let titles = ScoreTitleRepo::list_for_group(pool, month, group_id).await?;
        let attendance = AttendanceRepo::list_for_group(pool, month, group_id).await?;
        let scores = ScoreRepo::list_for_group(pool, month, group_id).await?;

        let roster = Roster::new(
            attendance
                .iter()
                .map(|a| (a.student_id, a.lesson_id, a.present)),
            scores.iter().map(|s| (s.student_id, s.title_id, s.score)),
        );

        let lesson_ids: Vec<DbId> = lessons.iter().map(|l| l.id).collect();
        let title_ids: Vec<DbId> = titles.iter().map(|t| t.id).collect();

        let rows = students
            .into_iter()
            .map(|student| {
                let line = roster.line(student.id, student.fee, &lesson_ids, &title_ids);
                MonthViewRow { student, line }
            })
            .collect();

        Ok(Some(MonthView {
            month: month.get(),
            group,
            groups,
            lessons,
            titles,
            rows,
        }))
    }
}
