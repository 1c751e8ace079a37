//! Widget API route handlers.
//!
//! The embeddable widget calls two JSON endpoints: a config read that tells
//! it how (and whether) to render, and a submission endpoint that feeds the
//! intake service. Both run the same checks, in a fixed order:
//! origin guard → feature gate → validation. The gate takes precedence over
//! validation: a disabled widget rejects even invalid payloads with 403.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use waypoint_core::{Email, ItemId};

use crate::error::{AppError, Result, ValidationErrors};
use crate::models::WidgetPosition;
use crate::origin::origin_allowed;
use crate::services::intake::{self, NewSubmission};
use crate::state::AppState;

const MAX_TITLE_LENGTH: usize = 255;

/// The embedded widget script, shipped with the binary.
const WIDGET_SCRIPT: &str = include_str!("../../static/widget.js");

/// Response for `GET /api/widget/config`.
///
/// When the widget is disabled, or the caller's origin is not allow-listed,
/// only `enabled: false` is reported; the remaining configuration is not
/// revealed.
#[derive(Debug, Serialize)]
pub struct WidgetConfigResponse {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<WidgetPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
}

impl WidgetConfigResponse {
    const fn disabled() -> Self {
        Self {
            enabled: false,
            position: None,
            primary_color: None,
            button_text: None,
        }
    }
}

/// Widget submission payload.
///
/// `title`/`content` default to empty so missing fields reach the validator
/// (which reports them per field) instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Response for a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub item_id: ItemId,
    pub item_url: String,
}

fn origin_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::ORIGIN).and_then(|v| v.to_str().ok())
}

/// Widget configuration read.
///
/// GET /api/widget/config
///
/// Always 200. Denied or disabled callers learn only `enabled: false`.
#[instrument(skip(state, headers))]
pub async fn config(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<WidgetConfigResponse> {
    let settings = state.widget_settings().await;

    if !settings.enabled || !origin_allowed(origin_header(&headers), &settings.allowed_domains) {
        return Json(WidgetConfigResponse::disabled());
    }

    Json(WidgetConfigResponse {
        enabled: true,
        position: Some(settings.position),
        primary_color: Some(settings.primary_color),
        button_text: Some(settings.button_text),
    })
}

/// Widget feedback submission.
///
/// POST /api/widget/submit
///
/// 201 with the created item's URL on success; 403 when the widget is
/// disabled or the origin is denied (before any validation or mutation);
/// 422 with field-keyed errors for invalid payloads.
#[instrument(skip(state, headers, payload))]
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SubmitRequest>,
) -> Result<impl IntoResponse> {
    let settings = state.widget_settings().await;

    // Origin guard, then feature gate - both before validation, so a denied
    // caller learns nothing about the payload rules.
    if !origin_allowed(origin_header(&headers), &settings.allowed_domains) {
        return Err(AppError::Forbidden);
    }
    if !settings.enabled {
        return Err(AppError::Forbidden);
    }

    let mut errors = ValidationErrors::new();

    let title = payload.title.trim();
    if title.is_empty() {
        errors.add("title", "The title field is required.");
    } else if title.len() > MAX_TITLE_LENGTH {
        errors.add(
            "title",
            format!("The title may not be greater than {MAX_TITLE_LENGTH} characters."),
        );
    }

    let content = payload.content.trim();
    if content.is_empty() {
        errors.add("content", "The content field is required.");
    }

    let email = match payload
        .email
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(raw) => match Email::parse(raw) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.add("email", "The email must be a valid email address.");
                None
            }
        },
        None => None,
    };

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let outcome = intake::submit(
        state.pool(),
        NewSubmission {
            title: title.to_string(),
            content: content.to_string(),
            email,
            name: payload.name,
        },
    )
    .await?;

    let item_url = state.config().item_url(outcome.item.id);
    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            success: true,
            message: "Thanks for your feedback!".to_string(),
            item_id: outcome.item.id,
            item_url,
        }),
    ))
}

/// The embeddable widget script.
///
/// GET /widget.js
///
/// A pure static asset: the custom `<roadmap-widget>` element plus its
/// dark-mode observer, shipped with a script content type.
pub async fn script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        WIDGET_SCRIPT,
    )
}
