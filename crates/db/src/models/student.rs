//! Student master records and month/group-scoped enrolments.

use classbook_core::month::Month;
use classbook_core::types::{DbId, Money};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub student_master_id: DbId,
    pub fee: Money,
    pub month: i64,
    pub group_id: DbId,
}

/// A student row joined with its master name, as shown in the month view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentWithName {
    pub id: DbId,
    pub student_master_id: DbId,
    pub name: String,
    pub fee: Money,
    pub month: i64,
    pub group_id: DbId,
}

/// DTO for enrolling a student in a group for a month.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub name: String,
    pub fee: Money,
    pub month: Month,
    pub group_id: DbId,
}
