//! Admin API route handlers.
//!
//! Staff-only JSON surface: widget settings management plus the Vote and
//! User resources. Authentication is a bearer token mapped to a role by
//! [`StaffAuth`]; authorization is the capability table in
//! [`crate::policy`].

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use waypoint_core::{ItemId, Role, UserId, VoteId};

use crate::db;
use crate::error::{AppError, Result};
use crate::middleware::StaffAuth;
use crate::models::{ActivityAction, Vote, WidgetSettings};
use crate::origin::normalize_domain;
use crate::policy::{AdminAction, allows};
use crate::settings_form::{self, SettingsField};
use crate::state::AppState;

const LIST_LIMIT: i64 = 100;

fn authorize(role: Role, action: AdminAction) -> Result<()> {
    if allows(role, action) {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

// =============================================================================
// Widget settings
// =============================================================================

/// Read the current widget settings.
///
/// GET /admin/settings/widget
#[instrument(skip(state))]
pub async fn get_widget_settings(
    StaffAuth(role): StaffAuth,
    State(state): State<AppState>,
) -> Result<Json<WidgetSettings>> {
    authorize(role, AdminAction::View)?;
    Ok(Json(state.widget_settings().await))
}

/// Replace the widget settings.
///
/// PUT /admin/settings/widget
///
/// Persists the document first, then swaps the in-memory copy; widget
/// requests observe the change immediately after a successful response.
#[instrument(skip(state, payload))]
pub async fn update_widget_settings(
    StaffAuth(role): StaffAuth,
    State(state): State<AppState>,
    Json(payload): Json<WidgetSettings>,
) -> Result<Json<WidgetSettings>> {
    authorize(role, AdminAction::Update)?;

    let settings = validate_settings(payload)?;
    db::settings::save_widget_settings(state.pool(), &settings).await?;
    state.set_widget_settings(settings.clone()).await;

    tracing::info!(enabled = settings.enabled, "Widget settings updated");
    Ok(Json(settings))
}

/// The declarative settings form schema.
///
/// GET /admin/settings/widget/schema
#[instrument]
pub async fn widget_settings_schema(
    StaffAuth(role): StaffAuth,
) -> Result<Json<Vec<SettingsField>>> {
    authorize(role, AdminAction::View)?;
    Ok(Json(settings_form::widget_settings_form()))
}

fn validate_settings(mut settings: WidgetSettings) -> Result<WidgetSettings> {
    if !is_hex_color(&settings.primary_color) {
        return Err(AppError::BadRequest(
            "primary_color must be a #rrggbb hex color".to_string(),
        ));
    }

    settings.button_text = settings.button_text.trim().to_string();
    if settings.button_text.is_empty() {
        return Err(AppError::BadRequest(
            "button_text must not be empty".to_string(),
        ));
    }

    // Normalize allow-list entries to bare hosts; drop unusable ones.
    settings.allowed_domains = settings
        .allowed_domains
        .iter()
        .filter_map(|d| normalize_domain(d))
        .collect();

    Ok(settings)
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

// =============================================================================
// Votes resource
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct VoteListParams {
    pub item_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct VoteListResponse {
    pub votes: Vec<Vote>,
}

/// List votes, optionally for one item.
///
/// GET /admin/votes
#[instrument(skip(state))]
pub async fn list_votes(
    StaffAuth(role): StaffAuth,
    State(state): State<AppState>,
    Query(params): Query<VoteListParams>,
) -> Result<Json<VoteListResponse>> {
    authorize(role, AdminAction::ViewAny)?;

    let votes = db::votes::list(
        state.pool(),
        params.item_id.map(ItemId::new),
        LIST_LIMIT,
    )
    .await?;
    Ok(Json(VoteListResponse { votes }))
}

/// Delete a vote.
///
/// DELETE /admin/votes/{id}
///
/// Records a `vote_removed` entry on the item's activity trail. The
/// removal is system-attributed (staff identities are not user rows).
#[instrument(skip(state))]
pub async fn delete_vote(
    StaffAuth(role): StaffAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    authorize(role, AdminAction::Delete)?;

    let mut tx = state.pool().begin().await.map_err(db::RepositoryError::from)?;

    let vote = db::votes::delete(&mut *tx, VoteId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("vote {id}")))?;
    db::activities::record(&mut *tx, vote.item_id, ActivityAction::VoteRemoved, None).await?;

    tx.commit().await.map_err(db::RepositoryError::from)?;

    tracing::info!(vote_id = %vote.id, item_id = %vote.item_id, "Vote removed");
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Users resource
// =============================================================================

#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserView>,
}

/// List users, newest first.
///
/// GET /admin/users
#[instrument(skip(state))]
pub async fn list_users(
    StaffAuth(role): StaffAuth,
    State(state): State<AppState>,
) -> Result<Json<UserListResponse>> {
    authorize(role, AdminAction::ViewAny)?;

    let users = db::users::list(state.pool(), LIST_LIMIT)
        .await?
        .into_iter()
        .map(|u| UserView {
            id: u.id,
            name: u.name,
            email: u.email.into_inner(),
            role: u.role,
            created_at: u.created_at,
        })
        .collect();
    Ok(Json(UserListResponse { users }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use secrecy::SecretString;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::config::ServerConfig;
    use crate::routes;

    const ADMIN_TOKEN: &str = "aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6d";
    const EMPLOYEE_TOKEN: &str = "zC6d!uW4^rT0*pQ7&nL5#mK2@xY9$aB3";

    fn test_state() -> AppState {
        let config = ServerConfig {
            database_url: SecretString::from("postgres://localhost/waypoint_test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            admin_token: SecretString::from(ADMIN_TOKEN),
            employee_token: Some(SecretString::from(EMPLOYEE_TOKEN)),
            sentry_dsn: None,
            sentry_environment: None,
        };
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/waypoint_test")
            .unwrap();
        AppState::new(config, pool, WidgetSettings::default())
    }

    async fn status_for(request: Request<Body>) -> StatusCode {
        let app = routes::routes().with_state(test_state());
        app.oneshot(request).await.unwrap().status()
    }

    #[test]
    fn hex_colors_are_validated_strictly() {
        assert!(is_hex_color("#2563eb"));
        assert!(is_hex_color("#FFFFFF"));
        assert!(!is_hex_color("2563eb"));
        assert!(!is_hex_color("#25eb"));
        assert!(!is_hex_color("#25 3eb"));
        assert!(!is_hex_color("#2563ebff"));
    }

    #[test]
    fn settings_validation_normalizes_domains() {
        let settings = WidgetSettings {
            button_text: "  Feedback  ".to_string(),
            allowed_domains: vec![
                "https://Example.com/".to_string(),
                "  ".to_string(),
                "feedback.example.org".to_string(),
            ],
            ..WidgetSettings::default()
        };
        let validated = validate_settings(settings).unwrap();
        assert_eq!(validated.button_text, "Feedback");
        assert_eq!(
            validated.allowed_domains,
            vec!["example.com".to_string(), "feedback.example.org".to_string()]
        );
    }

    #[test]
    fn settings_validation_rejects_bad_colors_and_empty_labels() {
        let bad_color = WidgetSettings {
            primary_color: "blue".to_string(),
            ..WidgetSettings::default()
        };
        assert!(matches!(
            validate_settings(bad_color),
            Err(AppError::BadRequest(_))
        ));

        let empty_label = WidgetSettings {
            button_text: "   ".to_string(),
            ..WidgetSettings::default()
        };
        assert!(matches!(
            validate_settings(empty_label),
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn admin_routes_require_a_token() {
        let request = Request::builder()
            .uri("/admin/settings/widget")
            .body(Body::empty())
            .unwrap();
        assert_eq!(status_for(request).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_tokens_are_rejected() {
        let request = Request::builder()
            .uri("/admin/settings/widget")
            .header(header::AUTHORIZATION, "Bearer wrong-token")
            .body(Body::empty())
            .unwrap();
        assert_eq!(status_for(request).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn employees_cannot_manage_settings() {
        let request = Request::builder()
            .uri("/admin/settings/widget")
            .header(header::AUTHORIZATION, format!("Bearer {EMPLOYEE_TOKEN}"))
            .body(Body::empty())
            .unwrap();
        assert_eq!(status_for(request).await, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn employees_cannot_delete_votes() {
        let request = Request::builder()
            .method("DELETE")
            .uri("/admin/votes/1")
            .header(header::AUTHORIZATION, format!("Bearer {EMPLOYEE_TOKEN}"))
            .body(Body::empty())
            .unwrap();
        assert_eq!(status_for(request).await, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn admins_can_read_settings_without_touching_the_database() {
        let request = Request::builder()
            .uri("/admin/settings/widget")
            .header(header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}"))
            .body(Body::empty())
            .unwrap();
        assert_eq!(status_for(request).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn schema_is_served_to_admins() {
        let app = routes::routes().with_state(test_state());
        let request = Request::builder()
            .uri("/admin/settings/widget/schema")
            .header(header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}"))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let fields: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(fields[0]["key"], "enabled");
    }
}
