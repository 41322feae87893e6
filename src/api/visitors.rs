//! Visitor listing and profile endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::visitor::Visitor};

use super::AuthenticatedVisitor;

/// List registered visitors (admin only)
#[utoipa::path(
    get,
    path = "/visitors",
    tag = "visitors",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "List of visitors", body = [Visitor]),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn list_visitors(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(claims): AuthenticatedVisitor,
) -> AppResult<Json<Vec<Visitor>>> {
    claims.require_admin()?;

    let visitors = state.services.auth.list_visitors().await?;
    Ok(Json(visitors))
}

/// Profile of the logged-in visitor
#[utoipa::path(
    get,
    path = "/visitors/profile",
    tag = "visitors",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Visitor profile", body = Visitor),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Visitor not found")
    )
)]
pub async fn my_profile(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(claims): AuthenticatedVisitor,
) -> AppResult<Json<Visitor>> {
    let visitor = state.services.auth.get_visitor(claims.id).await?;
    Ok(Json(visitor))
}
