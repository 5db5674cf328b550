//! Repository for the `group_master` table.

use classbook_core::types::DbId;
use sqlx::SqliteConnection;

/// Find-or-create access to group identities.
pub struct GroupMasterRepo;

impl GroupMasterRepo {
    /// Return the id of the master record named `name`, creating it when
    /// absent. Runs on a caller-owned connection or transaction so the
    /// resolve shares the caller's commit.
    ///
    /// A single upsert statement: two concurrent callers with the same new
    /// name both get the one row's id.
    pub async fn resolve_in(conn: &mut SqliteConnection, name: &str) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO group_master (name) VALUES ($1) \
             ON CONFLICT (name) DO UPDATE SET name = excluded.name \
             RETURNING id",
        )
        .bind(name)
        .fetch_one(&mut *conn)
        .await?;
        Ok(id)
    }
}
