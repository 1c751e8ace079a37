//! User domain type.

use chrono::{DateTime, Utc};

use waypoint_core::{Email, Role, UserId};

/// A user identity.
///
/// Staff accounts are provisioned out of band; `Role::User` rows are
/// resolved or created from widget submissions.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// The user's email address (unique).
    pub email: Email,
    /// Role gating admin-facing operations.
    pub role: Role,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}
