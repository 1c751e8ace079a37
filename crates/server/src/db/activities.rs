//! Activity (audit trail) repository.
//!
//! Append-only; records are never updated or deleted.

use chrono::{DateTime, Utc};
use sqlx::PgExecutor;

use waypoint_core::{ActivityId, ItemId, UserId};

use super::RepositoryError;
use crate::models::{Activity, ActivityAction};

/// Raw database row; the action string is parsed into the domain enum.
#[derive(sqlx::FromRow)]
struct ActivityRow {
    id: i64,
    item_id: i64,
    action: String,
    causer_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl ActivityRow {
    fn into_domain(self) -> Result<Activity, RepositoryError> {
        let action: ActivityAction = self.action.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid action in database: {e}"))
        })?;

        Ok(Activity {
            id: ActivityId::new(self.id),
            item_id: ItemId::new(self.item_id),
            action,
            causer_id: self.causer_id.map(UserId::new),
            created_at: self.created_at,
        })
    }
}

/// Append an activity record to an item's trail.
///
/// `causer_id` is `None` for anonymous or system-initiated actions.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn record(
    executor: impl PgExecutor<'_>,
    item_id: ItemId,
    action: ActivityAction,
    causer_id: Option<UserId>,
) -> Result<Activity, RepositoryError> {
    let row = sqlx::query_as::<_, ActivityRow>(
        r"
        INSERT INTO activities (item_id, action, causer_id)
        VALUES ($1, $2, $3)
        RETURNING id, item_id, action, causer_id, created_at
        ",
    )
    .bind(item_id)
    .bind(action.as_str())
    .bind(causer_id)
    .fetch_one(executor)
    .await?;

    row.into_domain()
}

/// List an item's activity trail, oldest first.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
/// Returns `RepositoryError::DataCorruption` if a stored action is unknown.
pub async fn list_for_item(
    executor: impl PgExecutor<'_>,
    item_id: ItemId,
) -> Result<Vec<Activity>, RepositoryError> {
    let rows = sqlx::query_as::<_, ActivityRow>(
        r"
        SELECT id, item_id, action, causer_id, created_at
        FROM activities
        WHERE item_id = $1
        ORDER BY created_at ASC
        ",
    )
    .bind(item_id)
    .fetch_all(executor)
    .await?;

    rows.into_iter().map(ActivityRow::into_domain).collect()
}
