//! Shared fixtures for repository integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use classbook_core::month::Month;
use classbook_core::types::DbId;
use classbook_db::models::group::{CreateGroup, Group};
use classbook_db::models::lesson::{CreateLesson, Lesson};
use classbook_db::models::score::{CreateScoreTitle, ScoreTitle};
use classbook_db::models::student::{CreateStudent, Student};
use classbook_db::repositories::{GroupRepo, LessonRepo, ScoreTitleRepo, StudentRepo};
use sqlx::SqlitePool;

pub fn month(value: i64) -> Month {
    Month::new(value).unwrap()
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub async fn seed_group(pool: &SqlitePool, name: &str, m: i64) -> Group {
    GroupRepo::create(
        pool,
        &CreateGroup {
            name: name.to_string(),
            month: month(m),
        },
    )
    .await
    .unwrap()
}

pub async fn seed_student(pool: &SqlitePool, group: &Group, name: &str, fee: i64) -> Student {
    StudentRepo::create(
        pool,
        &CreateStudent {
            name: name.to_string(),
            fee,
            month: month(group.month),
            group_id: group.id,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_lesson(pool: &SqlitePool, group: &Group, on: &str) -> Lesson {
    LessonRepo::create(
        pool,
        &CreateLesson {
            month: month(group.month),
            group_id: group.id,
            lesson_date: date(on),
        },
    )
    .await
    .unwrap()
}

pub async fn seed_title(pool: &SqlitePool, group: &Group, title: &str) -> ScoreTitle {
    ScoreTitleRepo::create(
        pool,
        &CreateScoreTitle {
            month: month(group.month),
            group_id: group.id,
            title: title.to_string(),
        },
    )
    .await
    .unwrap()
}

/// Run a `SELECT COUNT(*) ...` query bound to a single id.
pub async fn count_where(pool: &SqlitePool, sql: &str, id: DbId) -> i64 {
    let row: (i64,) = sqlx::query_as(sql).bind(id).fetch_one(pool).await.unwrap();
    row.0
}

/// Count all rows of a table.
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

/// Stored presence flag for a (student, lesson) pair, if ever toggled.
pub async fn attendance_mark(pool: &SqlitePool, student_id: DbId, lesson_id: DbId) -> Option<bool> {
    let row: Option<(bool,)> =
        sqlx::query_as("SELECT present FROM attendance WHERE student_id = $1 AND lesson_id = $2")
            .bind(student_id)
            .bind(lesson_id)
            .fetch_optional(pool)
            .await
            .unwrap();
    row.map(|(present,)| present)
}

/// Stored score for a (student, title) pair, if ever saved.
pub async fn stored_score(pool: &SqlitePool, student_id: DbId, title_id: DbId) -> Option<f64> {
    let row: Option<(f64,)> =
        sqlx::query_as("SELECT score FROM scores WHERE student_id = $1 AND title_id = $2")
            .bind(student_id)
            .bind(title_id)
            .fetch_optional(pool)
            .await
            .unwrap();
    row.map(|(score,)| score)
}

/// Whether a `groups` row with this id exists in any month.
pub async fn group_exists(pool: &SqlitePool, id: DbId) -> bool {
    count_where(pool, "SELECT COUNT(*) FROM groups WHERE id = $1", id).await > 0
}
