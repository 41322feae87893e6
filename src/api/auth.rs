//! Authentication endpoints: register, login, logout, session info

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::visitor::{LoginRequest, LoginResponse, RegisterVisitor, Role, Visitor},
};

use super::{AuthenticatedVisitor, LOGGED_IN_COOKIE, SESSION_COOKIE};

/// Session identity info
#[derive(Serialize, ToSchema)]
pub struct SessionInfo {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Register a new visitor account
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterVisitor,
    responses(
        (status = 201, description = "Visitor registered", body = Visitor),
        (status = 400, description = "Invalid input or password mismatch"),
        (status = 409, description = "Email or Aadhar ID already registered")
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    Json(payload): Json<RegisterVisitor>,
) -> AppResult<(StatusCode, Json<Visitor>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let visitor = state.services.auth.register(payload).await?;
    Ok((StatusCode::CREATED, Json(visitor)))
}

/// Log in as visitor or admin
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, session cookies set", body = LoginResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (token, claims) = state.services.auth.login(&payload).await?;

    let jar = jar
        .add(
            Cookie::build((SESSION_COOKIE, token.clone()))
                .path("/")
                .http_only(true)
                .build(),
        )
        .add(Cookie::build((LOGGED_IN_COOKIE, "true")).path("/").build());

    Ok((
        jar,
        Json(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            id: claims.id,
            name: claims.name,
            email: claims.email,
            role: claims.role,
        }),
    ))
}

/// Log out: clear both session cookies
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out, cookies cleared")
    )
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<serde_json::Value>) {
    let jar = jar
        .remove(Cookie::build(SESSION_COOKIE).path("/").build())
        .remove(Cookie::build(LOGGED_IN_COOKIE).path("/").build());

    (jar, Json(serde_json::json!({ "message": "Logged out" })))
}

/// Current session identity
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Session identity", body = SessionInfo),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(AuthenticatedVisitor(claims): AuthenticatedVisitor) -> Json<SessionInfo> {
    Json(SessionInfo {
        id: claims.id,
        name: claims.name,
        email: claims.email,
        role: claims.role,
    })
}
