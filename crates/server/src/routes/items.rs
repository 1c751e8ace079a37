//! Public item detail route.
//!
//! `item_url` in widget submission responses points here.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

use waypoint_core::{ItemId, UserId};

use crate::db;
use crate::error::{AppError, Result};
use crate::models::ActivityAction;
use crate::state::AppState;

/// The submitter, when the item was not anonymous.
#[derive(Debug, Serialize)]
pub struct SubmitterView {
    pub id: UserId,
    pub name: String,
}

/// One entry of the item's activity trail.
#[derive(Debug, Serialize)]
pub struct ActivityView {
    pub action: ActivityAction,
    pub causer_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

/// Response for `GET /items/{id}`.
#[derive(Debug, Serialize)]
pub struct ItemDetail {
    pub id: ItemId,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitter: Option<SubmitterView>,
    pub vote_count: i64,
    pub activities: Vec<ActivityView>,
    pub created_at: DateTime<Utc>,
}

/// Item detail page data.
///
/// GET /items/{id}
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<ItemDetail>> {
    let item_id = ItemId::new(id);
    let pool = state.pool();

    let item = db::items::get_by_id(pool, item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("item {id}")))?;

    let submitter = match item.user_id {
        Some(user_id) => db::users::get_by_id(pool, user_id)
            .await?
            .map(|u| SubmitterView {
                id: u.id,
                name: u.name,
            }),
        None => None,
    };

    let vote_count = db::votes::count_for_item(pool, item_id).await?;
    let activities = db::activities::list_for_item(pool, item_id)
        .await?
        .into_iter()
        .map(|a| ActivityView {
            action: a.action,
            causer_id: a.causer_id,
            created_at: a.created_at,
        })
        .collect();

    Ok(Json(ItemDetail {
        id: item.id,
        title: item.title,
        content: item.content,
        submitter,
        vote_count,
        activities,
        created_at: item.created_at,
    }))
}
