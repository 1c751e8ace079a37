//! Vote domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use waypoint_core::{ItemId, UserId, VoteId};

/// A single user's endorsement of an item.
///
/// At most one vote exists per `(item, user)` pair; the database enforces
/// this with a unique constraint.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Vote {
    /// Unique vote ID.
    pub id: VoteId,
    /// The item voted on.
    pub item_id: ItemId,
    /// The voting user.
    pub user_id: UserId,
    /// When the vote was cast.
    pub created_at: DateTime<Utc>,
}
