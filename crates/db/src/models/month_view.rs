//! The materialized month/group sheet.

use classbook_core::roster::RosterLine;
use serde::Serialize;

use crate::models::group::GroupSummary;
use crate::models::lesson::Lesson;
use crate::models::score::ScoreTitle;
use crate::models::student::StudentWithName;

/// Students x lessons x titles for one group in one month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthView {
    pub month: i64,
    pub group: GroupSummary,
    /// Every group of the month, for navigation between sheets.
    pub groups: Vec<GroupSummary>,
    /// Ascending by date.
    pub lessons: Vec<Lesson>,
    pub titles: Vec<ScoreTitle>,
    pub rows: Vec<MonthViewRow>,
}

/// One student's line of the sheet. `attendance` is aligned with
/// [`MonthView::lessons`] and `scores` with [`MonthView::titles`].
#[derive(Debug, Clone, Serialize)]
pub struct MonthViewRow {
    pub student: StudentWithName,
    #[serde(flatten)]
    pub line: RosterLine,
}
