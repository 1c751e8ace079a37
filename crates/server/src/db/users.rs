//! User repository.
//!
//! Widget submissions resolve identities here; staff rows are provisioned
//! out of band and only read.

use chrono::{DateTime, Utc};
use sqlx::PgExecutor;

use waypoint_core::{Email, Role, UserId};

use super::RepositoryError;
use crate::models::User;

/// Raw database row; email and role are parsed into domain types.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_domain(self) -> Result<User, RepositoryError> {
        let email = Email::parse(&self.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let role: Role = self.role.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid role in database: {e}"))
        })?;

        Ok(User {
            id: UserId::new(self.id),
            name: self.name,
            email,
            role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Get a user by email address.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
/// Returns `RepositoryError::DataCorruption` if a stored field is invalid.
pub async fn get_by_email(
    executor: impl PgExecutor<'_>,
    email: &Email,
) -> Result<Option<User>, RepositoryError> {
    let row = sqlx::query_as::<_, UserRow>(
        r"
        SELECT id, name, email, role, created_at, updated_at
        FROM users
        WHERE email = $1
        ",
    )
    .bind(email.as_str())
    .fetch_optional(executor)
    .await?;

    row.map(UserRow::into_domain).transpose()
}

/// Get a user by ID.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
/// Returns `RepositoryError::DataCorruption` if a stored field is invalid.
pub async fn get_by_id(
    executor: impl PgExecutor<'_>,
    id: UserId,
) -> Result<Option<User>, RepositoryError> {
    let row = sqlx::query_as::<_, UserRow>(
        r"
        SELECT id, name, email, role, created_at, updated_at
        FROM users
        WHERE id = $1
        ",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    row.map(UserRow::into_domain).transpose()
}

/// Find a user by email, creating a `Role::User` row when none exists.
///
/// A single upsert statement, so concurrent calls for the same email cannot
/// race into a duplicate. The supplied `name` only applies when the row is
/// created; an existing user's name is never overwritten. When creating with
/// no name, the email local part is used.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
/// Returns `RepositoryError::DataCorruption` if a stored field is invalid.
pub async fn find_or_create(
    executor: impl PgExecutor<'_>,
    email: &Email,
    name: Option<&str>,
) -> Result<User, RepositoryError> {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| email.local_part());

    let row = sqlx::query_as::<_, UserRow>(
        r"
        INSERT INTO users (name, email, role)
        VALUES ($1, $2, $3)
        ON CONFLICT (email) DO UPDATE SET name = users.name
        RETURNING id, name, email, role, created_at, updated_at
        ",
    )
    .bind(name)
    .bind(email.as_str())
    .bind(Role::User.as_str())
    .fetch_one(executor)
    .await?;

    row.into_domain()
}

/// List users, newest first.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
/// Returns `RepositoryError::DataCorruption` if a stored field is invalid.
pub async fn list(
    executor: impl PgExecutor<'_>,
    limit: i64,
) -> Result<Vec<User>, RepositoryError> {
    let rows = sqlx::query_as::<_, UserRow>(
        r"
        SELECT id, name, email, role, created_at, updated_at
        FROM users
        ORDER BY created_at DESC
        LIMIT $1
        ",
    )
    .bind(limit)
    .fetch_all(executor)
    .await?;

    rows.into_iter().map(UserRow::into_domain).collect()
}
