//! Database operations for the Waypoint `PostgreSQL` database.
//!
//! # Schema
//!
//! Migrations are managed out of band; the server expects these tables:
//!
//! - `settings` - JSONB key/value store (`key TEXT PRIMARY KEY`, `value JSONB`,
//!   `updated_at TIMESTAMPTZ`). The widget document lives under key `widget`.
//! - `users` - identities (`id BIGSERIAL`, `name TEXT`, `email TEXT UNIQUE`,
//!   `role TEXT`, `created_at`/`updated_at TIMESTAMPTZ`)
//! - `items` - feedback entries (`id BIGSERIAL`, `title TEXT`, `content TEXT`,
//!   `user_id BIGINT NULL REFERENCES users (id)`, timestamps)
//! - `votes` - endorsements (`id BIGSERIAL`, `item_id BIGINT REFERENCES items (id)`,
//!   `user_id BIGINT REFERENCES users (id)`, `created_at`,
//!   `UNIQUE (item_id, user_id)`)
//! - `activities` - append-only audit trail (`id BIGSERIAL`, `item_id`,
//!   `action TEXT`, `causer_id BIGINT NULL`, `created_at`)
//!
//! Queries use the sqlx runtime API (`query`/`query_as` with `FromRow` row
//! types) so the workspace builds without a live database; repositories map
//! rows into the domain types in [`crate::models`].

pub mod activities;
pub mod items;
pub mod settings;
pub mod users;
pub mod votes;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// A stored document failed to (de)serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
