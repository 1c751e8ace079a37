//! Item intake service.
//!
//! The transactional core of the widget: one submission becomes an item,
//! the submitter's automatic vote, and an attributed activity record — all
//! in a single transaction. Any failure rolls back everything; no partial
//! Item/Vote/Activity is ever visible.

use sqlx::PgPool;
use tracing::instrument;

use waypoint_core::Email;

use crate::db::{self, RepositoryError};
use crate::models::{Activity, ActivityAction, Item, User, Vote};

/// A validated widget submission.
#[derive(Debug)]
pub struct NewSubmission {
    /// Short summary (validated non-empty).
    pub title: String,
    /// Full feedback text (validated non-empty).
    pub content: String,
    /// Submitter's email, when they identified themselves.
    pub email: Option<Email>,
    /// Submitter's display name, used only if a user row is created.
    pub name: Option<String>,
}

/// Everything the intake transaction produced.
#[derive(Debug)]
pub struct SubmissionOutcome {
    /// The created feedback item.
    pub item: Item,
    /// The resolved submitter, when the submission carried an email.
    pub submitter: Option<User>,
    /// The submitter's automatic vote, when an identity was resolved.
    pub vote: Option<Vote>,
    /// The attributed audit record.
    pub activity: Activity,
}

/// Process a widget submission.
///
/// 1. Resolve the identity (find-or-create by email; anonymous when absent).
/// 2. Create the item.
/// 3. Cast the submitter's automatic vote, when identified.
/// 4. Record a `created` activity attributed to the submitter (or to
///    no one, for anonymous submissions).
///
/// # Errors
///
/// Returns `RepositoryError` if any step fails; the transaction is rolled
/// back and nothing is persisted.
#[instrument(skip(pool, submission), fields(anonymous = submission.email.is_none()))]
pub async fn submit(
    pool: &PgPool,
    submission: NewSubmission,
) -> Result<SubmissionOutcome, RepositoryError> {
    let mut tx = pool.begin().await?;

    let submitter = match &submission.email {
        Some(email) => {
            Some(db::users::find_or_create(&mut *tx, email, submission.name.as_deref()).await?)
        }
        None => None,
    };
    let submitter_id = submitter.as_ref().map(|u| u.id);

    let item = db::items::insert(
        &mut *tx,
        &submission.title,
        &submission.content,
        submitter_id,
    )
    .await?;

    let vote = match submitter_id {
        Some(user_id) => db::votes::insert(&mut *tx, item.id, user_id).await?,
        None => None,
    };

    let activity =
        db::activities::record(&mut *tx, item.id, ActivityAction::ItemCreated, submitter_id)
            .await?;

    tx.commit().await?;

    tracing::info!(
        item_id = %item.id,
        voted = vote.is_some(),
        "Feedback item created via widget"
    );

    Ok(SubmissionOutcome {
        item,
        submitter,
        vote,
        activity,
    })
}
