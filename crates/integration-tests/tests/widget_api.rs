//! Integration tests for the embeddable widget's API contract.
//!
//! These tests require:
//! - A running `PostgreSQL` database with the Waypoint schema
//! - The server running (cargo run -p waypoint-server)
//! - `WAYPOINT_ADMIN_TOKEN` matching the server's configuration
//!
//! Run with: cargo test -p waypoint-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the server (configurable via environment).
fn base_url() -> String {
    std::env::var("WAYPOINT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

fn admin_token() -> String {
    std::env::var("WAYPOINT_ADMIN_TOKEN").expect("WAYPOINT_ADMIN_TOKEN must be set")
}

/// A unique email per test run so find-or-create always creates.
fn unique_email(prefix: &str) -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("{prefix}-{nanos:x}@example.com")
}

/// Test helper: replace the widget settings via the admin API.
async fn configure_widget(client: &Client, enabled: bool, allowed_domains: Value) {
    let resp = client
        .put(format!("{}/admin/settings/widget", base_url()))
        .bearer_auth(admin_token())
        .json(&json!({
            "enabled": enabled,
            "position": "bottom-right",
            "primary_color": "#2563eb",
            "button_text": "Feedback",
            "allowed_domains": allowed_domains,
        }))
        .send()
        .await
        .expect("Failed to update widget settings");

    assert_eq!(resp.status(), StatusCode::OK);
}

async fn submit(client: &Client, origin: Option<&str>, payload: &Value) -> reqwest::Response {
    let mut request = client
        .post(format!("{}/api/widget/submit", base_url()))
        .json(payload);
    if let Some(origin) = origin {
        request = request.header("Origin", origin);
    }
    request.send().await.expect("Failed to submit feedback")
}

// ============================================================================
// Config endpoint
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running waypoint-server and PostgreSQL"]
async fn config_reflects_enabled_settings() {
    let client = Client::new();
    configure_widget(&client, true, json!([])).await;

    let resp = client
        .get(format!("{}/api/widget/config", base_url()))
        .send()
        .await
        .expect("Failed to get config");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body["enabled"], true);
    assert_eq!(body["position"], "bottom-right");
    assert_eq!(body["primary_color"], "#2563eb");
    assert_eq!(body["button_text"], "Feedback");
}

#[tokio::test]
#[ignore = "Requires a running waypoint-server and PostgreSQL"]
async fn config_hides_settings_when_disabled() {
    let client = Client::new();
    configure_widget(&client, false, json!([])).await;

    let resp = client
        .get(format!("{}/api/widget/config", base_url()))
        .send()
        .await
        .expect("Failed to get config");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body, json!({"enabled": false}));
}

#[tokio::test]
#[ignore = "Requires a running waypoint-server and PostgreSQL"]
async fn config_hides_settings_from_unlisted_origins() {
    let client = Client::new();
    configure_widget(&client, true, json!(["example.com"])).await;

    let resp = client
        .get(format!("{}/api/widget/config", base_url()))
        .header("Origin", "https://notallowed.com")
        .send()
        .await
        .expect("Failed to get config");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body, json!({"enabled": false}));
}

// ============================================================================
// Submission endpoint
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running waypoint-server and PostgreSQL"]
async fn identified_submission_creates_item_vote_and_activity() {
    let client = Client::new();
    configure_widget(&client, true, json!([])).await;

    let email = unique_email("ada");
    let resp = submit(
        &client,
        None,
        &json!({"title": "T", "content": "C", "email": email, "name": "Ada"}),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body["success"], true);
    let item_url = body["item_url"].as_str().expect("item_url missing");
    assert!(item_url.contains("/items/"));

    // The detail page must show the full attribution chain.
    let detail: Value = client
        .get(item_url)
        .send()
        .await
        .expect("Failed to get item detail")
        .json()
        .await
        .expect("Invalid JSON");

    assert_eq!(detail["title"], "T");
    assert_eq!(detail["content"], "C");
    assert_eq!(detail["submitter"]["name"], "Ada");
    assert_eq!(detail["vote_count"], 1);

    let activities = detail["activities"].as_array().expect("activities missing");
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0]["action"], "item_created");
    assert_eq!(activities[0]["causer_id"], detail["submitter"]["id"]);
}

#[tokio::test]
#[ignore = "Requires a running waypoint-server and PostgreSQL"]
async fn anonymous_submission_creates_item_without_vote() {
    let client = Client::new();
    configure_widget(&client, true, json!([])).await;

    let resp = submit(&client, None, &json!({"title": "Anon", "content": "No email"})).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Invalid JSON");

    let detail: Value = client
        .get(body["item_url"].as_str().expect("item_url missing"))
        .send()
        .await
        .expect("Failed to get item detail")
        .json()
        .await
        .expect("Invalid JSON");

    assert!(detail.get("submitter").is_none());
    assert_eq!(detail["vote_count"], 0);
    let activities = detail["activities"].as_array().expect("activities missing");
    assert_eq!(activities.len(), 1);
    assert!(activities[0]["causer_id"].is_null());
}

#[tokio::test]
#[ignore = "Requires a running waypoint-server and PostgreSQL"]
async fn submission_is_forbidden_when_disabled() {
    let client = Client::new();
    configure_widget(&client, false, json!([])).await;

    let resp = submit(&client, None, &json!({"title": "T", "content": "C"})).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "Requires a running waypoint-server and PostgreSQL"]
async fn submission_is_forbidden_for_unlisted_origins() {
    let client = Client::new();
    configure_widget(&client, true, json!(["example.com"])).await;

    let resp = submit(
        &client,
        Some("https://notallowed.com"),
        &json!({"title": "T", "content": "C"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "Requires a running waypoint-server and PostgreSQL"]
async fn missing_fields_are_reported_per_field() {
    let client = Client::new();
    configure_widget(&client, true, json!([])).await;

    let resp = submit(&client, None, &json!({})).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = resp.json().await.expect("Invalid JSON");
    assert!(body["errors"]["title"].is_array());
    assert!(body["errors"]["content"].is_array());
}

#[tokio::test]
#[ignore = "Requires a running waypoint-server and PostgreSQL"]
async fn identical_submissions_create_distinct_items() {
    let client = Client::new();
    configure_widget(&client, true, json!([])).await;

    let payload = json!({"title": "Same", "content": "Same"});
    let first: Value = submit(&client, None, &payload)
        .await
        .json()
        .await
        .expect("Invalid JSON");
    let second: Value = submit(&client, None, &payload)
        .await
        .json()
        .await
        .expect("Invalid JSON");

    assert_ne!(first["item_id"], second["item_id"]);
}

// ============================================================================
// Widget script
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running waypoint-server and PostgreSQL"]
async fn widget_script_defines_the_custom_element() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/widget.js", base_url()))
        .send()
        .await
        .expect("Failed to get widget script");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/javascript")
    );

    let script = resp.text().await.expect("Failed to read script");
    assert!(script.contains("roadmap-widget"));
    assert!(script.contains("MutationObserver"));
}
