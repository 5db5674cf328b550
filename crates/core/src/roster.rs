//! Per-student aggregation behind the month view.
//!
//! Attendance and scores are sparse overlays: a missing attendance record
//! and a record with `present = false` both count as absent, and a missing
//! score is reported as `None`. [`Roster`] indexes the overlay rows for one
//! group/month once, then [`Roster::line`] materializes each student's row
//! aligned to the lesson and title order chosen by the caller.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::types::{DbId, Money};

/// One attendance record as stored: `(student_id, lesson_id, present)`.
pub type AttendanceMark = (DbId, DbId, bool);

/// One score record as stored: `(student_id, title_id, score)`.
pub type ScoreMark = (DbId, DbId, f64);

/// Derived figures for a single student in a single group/month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterLine {
    /// `1` or `0` per lesson, in lesson order.
    pub attendance: Vec<u8>,
    /// Number of attended lessons.
    pub total: i64,
    /// `total * fee`.
    pub money: Money,
    /// Score per title, in title order; `None` where nothing was saved.
    pub scores: Vec<Option<f64>>,
}

/// Indexed attendance and scores for one group/month.
#[derive(Debug, Default)]
pub struct Roster {
    present: HashSet<(DbId, DbId)>,
    scores: HashMap<(DbId, DbId), f64>,
}

impl Roster {
    pub fn new(
        attendance: impl IntoIterator<Item = AttendanceMark>,
        scores: impl IntoIterator<Item = ScoreMark>,
    ) -> Self {
        let present = attendance
            .into_iter()
            .filter(|&(_, _, present)| present)
            .map(|(student_id, lesson_id, _)| (student_id, lesson_id))
            .collect();
        let scores = scores
            .into_iter()
            .map(|(student_id, title_id, score)| ((student_id, title_id), score))
            .collect();
        Self { present, scores }
    }

    /// Build the row for `student_id`, aligned to `lesson_ids` and `title_ids`.
    pub fn line(
        &self,
        student_id: DbId,
        fee: Money,
        lesson_ids: &[DbId],
        title_ids: &[DbId],
    ) -> RosterLine {
        let attendance: Vec<u8> = lesson_ids
            .iter()
            .map(|&lesson_id| u8::from(self.present.contains(&(student_id, lesson_id))))
            .collect();
        let total = attendance.iter().map(|&v| i64::from(v)).sum();
        let scores = title_ids
            .iter()
            .map(|&title_id| self.scores.get(&(student_id, title_id)).copied())
            .collect();

        RosterLine {
            attendance,
            total,
            money: money_for(total, fee),
            scores,
        }
    }
}

/// Billing for a month: attended lessons times the per-lesson fee.
pub fn money_for(total: i64, fee: Money) -> Money {
    total.saturating_mul(fee)
}
