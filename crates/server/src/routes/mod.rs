//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Liveness check (in main)
//! GET  /health/ready                  - Readiness check (in main)
//!
//! # Widget (public, CORS-open; the origin guard is the enforcement point)
//! GET  /api/widget/config             - Widget configuration for the embedding site
//! POST /api/widget/submit             - Feedback submission
//! GET  /widget.js                     - Embeddable custom-element script
//!
//! # Items (public)
//! GET  /items/{id}                    - Item detail (votes, activity trail)
//!
//! # Admin (bearer token, policy-gated)
//! GET  /admin/settings/widget         - Current widget settings
//! PUT  /admin/settings/widget         - Replace widget settings
//! GET  /admin/settings/widget/schema  - Settings form schema
//! GET  /admin/votes                   - List votes (optionally ?item_id=)
//! DELETE /admin/votes/{id}            - Delete a vote
//! GET  /admin/users                   - List users
//! ```

pub mod admin;
pub mod items;
pub mod widget;

use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Create the widget API router.
///
/// Browsers on third-party sites call these endpoints, so they carry a
/// permissive CORS layer; access control is the origin guard inside the
/// handlers, which fails closed rather than relying on CORS.
pub fn widget_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/widget/config", get(widget::config))
        .route("/api/widget/submit", post(widget::submit))
        .route("/widget.js", get(widget::script))
        .layer(cors)
}

/// Create the admin API router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/settings/widget",
            get(admin::get_widget_settings).put(admin::update_widget_settings),
        )
        .route("/settings/widget/schema", get(admin::widget_settings_schema))
        .route("/votes", get(admin::list_votes))
        .route("/votes/{id}", delete(admin::delete_vote))
        .route("/users", get(admin::list_users))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(widget_routes())
        .route("/items/{id}", get(items::show))
        .nest("/admin", admin_routes())
}
