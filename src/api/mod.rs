//! API handlers for Aranya REST endpoints

pub mod animals;
pub mod auth;
pub mod bookings;
pub mod dashboard;
pub mod feedback;
pub mod health;
pub mod medical;
pub mod openapi;
pub mod staff;
pub mod visitors;
pub mod zones;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{error::AppError, models::visitor::SessionClaims, AppState};

/// Cookie carrying the signed session token
pub const SESSION_COOKIE: &str = "session_token";
/// Plain flag cookie clients read to toggle logged-in UI state
pub const LOGGED_IN_COOKIE: &str = "is_logged_in";

/// Read the session token from the cookie, falling back to a bearer header
fn token_from_parts(parts: &Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }

    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}

/// Extractor for an authenticated session
pub struct AuthenticatedVisitor(pub SessionClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedVisitor {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = token_from_parts(parts)
            .ok_or_else(|| AppError::Authentication("Not logged in".to_string()))?;

        // Validate the session token using the secret from configuration
        let claims = SessionClaims::from_token(&token, &state.config.auth.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        Ok(AuthenticatedVisitor(claims))
    }
}

/// Extractor for routes reachable anonymously. A missing, tampered or
/// expired token degrades silently to the anonymous state instead of
/// failing the request.
pub struct OptionalVisitor(pub Option<SessionClaims>);

#[async_trait]
impl FromRequestParts<AppState> for OptionalVisitor {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let claims = token_from_parts(parts)
            .and_then(|token| SessionClaims::from_token(&token, &state.config.auth.jwt_secret).ok());

        Ok(OptionalVisitor(claims))
    }
}
