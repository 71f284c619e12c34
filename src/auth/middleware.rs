use std::sync::Arc;

use axum::{
    Json,
    extract::FromRequestParts,
    http::{HeaderValue, StatusCode, header::AUTHORIZATION, header::WWW_AUTHENTICATE, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::{Role, User};
use crate::server::AppState;

/// Extractor that requires a caller holding the `user` role
pub struct RequireUser(pub User);

/// Extractor that requires a caller holding the `admin` role
pub struct RequireAdmin(pub User);

#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    MissingAuth,
    InvalidScheme,
    InvalidToken,
    MissingRole(Role),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingAuth => (StatusCode::UNAUTHORIZED, "Authentication required"),
            AuthError::InvalidScheme => (StatusCode::UNAUTHORIZED, "Invalid authorization scheme"),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
            AuthError::MissingRole(Role::User) => (StatusCode::FORBIDDEN, "User role required"),
            AuthError::MissingRole(Role::Admin) => (StatusCode::FORBIDDEN, "Admin role required"),
        };

        let body = json!({ "data": null, "error": message });

        let mut response = (status, Json(body)).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                WWW_AUTHENTICATE,
                HeaderValue::from_static("Bearer realm=\"space-rangers\""),
            );
        }

        response
    }
}

impl FromRequestParts<Arc<AppState>> for RequireUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let user = authenticate(parts, state, Role::User)?;
        Ok(RequireUser(user))
    }
}

impl FromRequestParts<Arc<AppState>> for RequireAdmin {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let user = authenticate(parts, state, Role::Admin)?;
        Ok(RequireAdmin(user))
    }
}

/// Extracts a bearer token from an Authorization header value.
/// Returns None if no header is present.
pub fn extract_bearer_token(auth_header: Option<&str>) -> Result<Option<&str>, AuthError> {
    match auth_header {
        Some(header) => header
            .strip_prefix("Bearer ")
            .map(|token| Some(token.trim()))
            .ok_or(AuthError::InvalidScheme),
        None => Ok(None),
    }
}

fn authenticate(parts: &Parts, state: &AppState, role: Role) -> Result<User, AuthError> {
    let auth_header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = extract_bearer_token(auth_header)?.ok_or(AuthError::MissingAuth)?;

    let user = state
        .users
        .resolve_token(token)
        .ok_or(AuthError::InvalidToken)?;

    if !user.has_role(role) {
        tracing::debug!(user = %user.id, ?role, "Rejected request lacking role");
        return Err(AuthError::MissingRole(role));
    }

    Ok(user.clone())
}
