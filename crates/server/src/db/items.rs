//! Item repository.

use sqlx::PgExecutor;

use waypoint_core::{ItemId, UserId};

use super::RepositoryError;
use crate::models::Item;

/// Insert a new feedback item.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn insert(
    executor: impl PgExecutor<'_>,
    title: &str,
    content: &str,
    user_id: Option<UserId>,
) -> Result<Item, RepositoryError> {
    let item = sqlx::query_as::<_, Item>(
        r"
        INSERT INTO items (title, content, user_id)
        VALUES ($1, $2, $3)
        RETURNING id, title, content, user_id, created_at, updated_at
        ",
    )
    .bind(title)
    .bind(content)
    .bind(user_id)
    .fetch_one(executor)
    .await?;

    Ok(item)
}

/// Get an item by ID.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn get_by_id(
    executor: impl PgExecutor<'_>,
    id: ItemId,
) -> Result<Option<Item>, RepositoryError> {
    let item = sqlx::query_as::<_, Item>(
        r"
        SELECT id, title, content, user_id, created_at, updated_at
        FROM items
        WHERE id = $1
        ",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(item)
}
