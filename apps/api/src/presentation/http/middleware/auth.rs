use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::presentation::http::{errors::AppError, state::AppState};

/// Header carrying the signed session token.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Token payload. The user id travels either as the standard `sub` claim or
/// nested as `user.id`, the shape older sessions were issued with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ClaimedUser>,
    pub exp: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimedUser {
    pub id: String,
}

impl AuthClaims {
    pub fn new(user_id: Uuid, exp: usize) -> Self {
        Self {
            sub: Some(user_id.to_string()),
            user: None,
            exp,
        }
    }

    fn subject(&self) -> Option<&str> {
        self.sub
            .as_deref()
            .or_else(|| self.user.as_ref().map(|u| u.id.as_str()))
    }
}

/// Identity of the caller, attached to the request by [`require_auth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("No token, authorization denied")]
    MissingToken,
    #[error("Token is not valid")]
    InvalidToken,
}

/// Verifies `x-auth-token` headers against the configured secret.
pub struct AuthGuard {
    key: DecodingKey,
    validation: Validation,
}

impl AuthGuard {
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }

    pub fn verify(&self, headers: &HeaderMap) -> Result<AuthUser, AuthError> {
        let token = headers
            .get(AUTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = decode::<AuthClaims>(token, &self.key, &self.validation)
            .map_err(|e| {
                tracing::debug!(jwt_error = %e, "token rejected");
                AuthError::InvalidToken
            })?
            .claims;

        let subject = claims.subject().ok_or(AuthError::InvalidToken)?;
        let id = Uuid::parse_str(subject).map_err(|_| AuthError::InvalidToken)?;
        Ok(AuthUser { id })
    }
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = state.auth.verify(req.headers())?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
