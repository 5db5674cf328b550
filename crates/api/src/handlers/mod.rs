pub mod attendance;
pub mod groups;
pub mod index;
pub mod lessons;
pub mod month;
pub mod scores;
pub mod students;

use classbook_core::error::CoreError;
use classbook_core::month::Month;
use classbook_core::types::DbId;
use classbook_db::models::group::GroupSummary;
use classbook_db::repositories::GroupRepo;
use serde::{Deserialize, Deserializer};

use crate::error::{AppError, AppResult};

/// Load a group that must exist in `month`, or fail with `NotFound`.
pub(crate) async fn ensure_group_in_month(
    pool: &classbook_db::DbPool,
    group_id: DbId,
    month: Month,
) -> AppResult<GroupSummary> {
    GroupRepo::find_in_month(pool, group_id, month)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Group",
            id: group_id,
        }))
}

/// Location of the month sheet for a group.
pub(crate) fn month_sheet_path(month: Month, group_id: DbId) -> String {
    format!("/month/{month}/{group_id}")
}

/// Location of a month's group list.
pub(crate) fn group_list_path(month: Month) -> String {
    format!("/groups/{month}")
}

/// Read an optional id from a query string where a blank value means
/// "nothing selected" (`?student_id=`). Use with `#[serde(default)]`.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid id '{value}'"))),
    }
}
