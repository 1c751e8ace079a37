//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::models::WidgetSettings;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The widget settings document is loaded once
/// at startup and held in memory; admin updates persist to the database and
/// then swap the in-memory copy, so widget request paths never read the
/// database for configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    pool: PgPool,
    settings: RwLock<WidgetSettings>,
}

impl AppState {
    /// Create a new application state with the settings loaded at startup.
    #[must_use]
    pub fn new(config: ServerConfig, pool: PgPool, settings: WidgetSettings) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                settings: RwLock::new(settings),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Current widget settings (cloned snapshot).
    pub async fn widget_settings(&self) -> WidgetSettings {
        self.inner.settings.read().await.clone()
    }

    /// Replace the in-memory widget settings after a persisted update.
    pub async fn set_widget_settings(&self, settings: WidgetSettings) {
        *self.inner.settings.write().await = settings;
    }
}
