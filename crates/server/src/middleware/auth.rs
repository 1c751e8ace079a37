//! Staff authentication extractor for the admin API.
//!
//! Staff authenticate with static bearer tokens from configuration; the
//! extractor maps the presented token to a [`Role`]. Interactive login
//! belongs to the admin panel, not this service.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use secrecy::ExposeSecret;

use waypoint_core::Role;

use crate::error::AppError;
use crate::state::AppState;

/// Extractor that requires a valid staff bearer token.
///
/// Rejects with 401 when the `Authorization` header is missing, malformed,
/// or carries an unknown token. Handlers receive the resolved role and
/// consult [`crate::policy`] for what it may do.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(StaffAuth(role): StaffAuth) -> impl IntoResponse {
///     format!("hello, {role}")
/// }
/// ```
pub struct StaffAuth(pub Role);

impl FromRequestParts<AppState> for StaffAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("missing Authorization header".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("expected a bearer token".to_string()))?;

        let config = state.config();
        if token == config.admin_token.expose_secret() {
            return Ok(Self(Role::Admin));
        }
        if let Some(employee_token) = &config.employee_token
            && token == employee_token.expose_secret()
        {
            return Ok(Self(Role::Employee));
        }

        Err(AppError::Unauthorized("unknown token".to_string()))
    }
}
