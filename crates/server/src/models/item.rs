//! Feedback item domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use waypoint_core::{ItemId, UserId};

/// A feedback entry.
///
/// `user_id` is null for anonymous submissions.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Item {
    /// Unique item ID.
    pub id: ItemId,
    /// Short summary of the feedback.
    pub title: String,
    /// Full feedback text.
    pub content: String,
    /// Submitting identity, when one was resolved.
    pub user_id: Option<UserId>,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}
