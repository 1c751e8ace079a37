//! Settings store operations.
//!
//! Generic JSONB key/value access plus typed load/save for the widget
//! settings document.

use serde_json::Value as JsonValue;
use sqlx::{PgExecutor, PgPool};

use super::RepositoryError;
use crate::models::WidgetSettings;

/// Settings-store key for the widget configuration document.
pub const WIDGET_SETTINGS_KEY: &str = "widget";

/// Get a setting value.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn get_setting(
    executor: impl PgExecutor<'_>,
    key: &str,
) -> Result<Option<JsonValue>, RepositoryError> {
    let value = sqlx::query_scalar::<_, JsonValue>(
        r"
        SELECT value FROM settings
        WHERE key = $1
        ",
    )
    .bind(key)
    .fetch_optional(executor)
    .await?;

    Ok(value)
}

/// Set a setting value (upsert).
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn set_setting(
    executor: impl PgExecutor<'_>,
    key: &str,
    value: &JsonValue,
) -> Result<(), RepositoryError> {
    sqlx::query(
        r"
        INSERT INTO settings (key, value)
        VALUES ($1, $2)
        ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW()
        ",
    )
    .bind(key)
    .bind(value)
    .execute(executor)
    .await?;

    Ok(())
}

/// Load the widget settings document, falling back to defaults when the
/// row has never been written.
///
/// # Errors
///
/// Returns an error if the query fails or the stored document is invalid.
pub async fn load_widget_settings(pool: &PgPool) -> Result<WidgetSettings, RepositoryError> {
    match get_setting(pool, WIDGET_SETTINGS_KEY).await? {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(WidgetSettings::default()),
    }
}

/// Persist the widget settings document.
///
/// # Errors
///
/// Returns an error if serialization or the database write fails.
pub async fn save_widget_settings(
    pool: &PgPool,
    settings: &WidgetSettings,
) -> Result<(), RepositoryError> {
    let value = serde_json::to_value(settings)?;
    set_setting(pool, WIDGET_SETTINGS_KEY, &value).await
}
