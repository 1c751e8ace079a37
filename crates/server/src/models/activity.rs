//! Activity (audit log) domain types.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use waypoint_core::{ActivityId, ItemId, UserId};

/// The kinds of recorded actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    /// An item was created (widget submission).
    ItemCreated,
    /// A vote was removed by staff.
    VoteRemoved,
}

impl ActivityAction {
    /// The action's canonical storage string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ItemCreated => "created",
            Self::VoteRemoved => "vote_removed",
        }
    }
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unrecognized stored action string.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown activity action: {0}")]
pub struct ActivityActionParseError(pub String);

impl FromStr for ActivityAction {
    type Err = ActivityActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::ItemCreated),
            "vote_removed" => Ok(Self::VoteRemoved),
            other => Err(ActivityActionParseError(other.to_owned())),
        }
    }
}

/// An append-only audit record attached to an item.
///
/// `causer_id` is the identity the action is attributed to; null means the
/// action was anonymous or system-initiated.
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    /// Unique activity ID.
    pub id: ActivityId,
    /// The item this record is attached to.
    pub item_id: ItemId,
    /// What happened.
    pub action: ActivityAction,
    /// Who caused it, when attributable.
    pub causer_id: Option<UserId>,
    /// When it happened.
    pub created_at: DateTime<Utc>,
}
