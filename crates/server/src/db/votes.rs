//! Vote repository.
//!
//! The `UNIQUE (item_id, user_id)` constraint keeps the one-vote-per-user
//! invariant correct under concurrent submissions; inserts report an
//! already-present vote as `None` instead of failing.

use sqlx::PgExecutor;

use waypoint_core::{ItemId, UserId, VoteId};

use super::RepositoryError;
use crate::models::Vote;

/// Insert a vote, unless the user has already voted on the item.
///
/// Returns `None` when the `(item, user)` pair already has a vote.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn insert(
    executor: impl PgExecutor<'_>,
    item_id: ItemId,
    user_id: UserId,
) -> Result<Option<Vote>, RepositoryError> {
    let vote = sqlx::query_as::<_, Vote>(
        r"
        INSERT INTO votes (item_id, user_id)
        VALUES ($1, $2)
        ON CONFLICT (item_id, user_id) DO NOTHING
        RETURNING id, item_id, user_id, created_at
        ",
    )
    .bind(item_id)
    .bind(user_id)
    .fetch_optional(executor)
    .await?;

    Ok(vote)
}

/// List votes, newest first, optionally filtered to one item.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn list(
    executor: impl PgExecutor<'_>,
    item_id: Option<ItemId>,
    limit: i64,
) -> Result<Vec<Vote>, RepositoryError> {
    let votes = sqlx::query_as::<_, Vote>(
        r"
        SELECT id, item_id, user_id, created_at
        FROM votes
        WHERE $1::BIGINT IS NULL OR item_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        ",
    )
    .bind(item_id)
    .bind(limit)
    .fetch_all(executor)
    .await?;

    Ok(votes)
}

/// Delete a vote, returning the deleted row so the caller can attribute
/// the removal on the item's activity trail.
///
/// Returns `None` when no vote with that ID exists.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the delete fails.
pub async fn delete(
    executor: impl PgExecutor<'_>,
    id: VoteId,
) -> Result<Option<Vote>, RepositoryError> {
    let vote = sqlx::query_as::<_, Vote>(
        r"
        DELETE FROM votes
        WHERE id = $1
        RETURNING id, item_id, user_id, created_at
        ",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(vote)
}

/// Count the votes on an item.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn count_for_item(
    executor: impl PgExecutor<'_>,
    item_id: ItemId,
) -> Result<i64, RepositoryError> {
    let count = sqlx::query_scalar::<_, i64>(
        r"
        SELECT COUNT(*) FROM votes WHERE item_id = $1
        ",
    )
    .bind(item_id)
    .fetch_one(executor)
    .await?;

    Ok(count)
}
