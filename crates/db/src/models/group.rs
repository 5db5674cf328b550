//! Group master records and month-scoped groups.

use classbook_core::month::Month;
use classbook_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `groups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Group {
    pub id: DbId,
    pub month: i64,
    pub group_master_id: DbId,
}

/// A month-scoped group joined with its master name.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct GroupSummary {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a group in a month. The name is resolved to a
/// `group_master` row, created when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroup {
    pub name: String,
    pub month: Month,
}

/// Outcome of copying the previous month's groups and students forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CopyReport {
    pub groups_created: u64,
    pub students_created: u64,
}
