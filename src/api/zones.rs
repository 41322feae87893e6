//! Zone record endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::zone::{CreateZone, Zone, ZoneQuery},
};

use super::AuthenticatedVisitor;

/// List zones with optional filters and sort
#[utoipa::path(
    get,
    path = "/zones",
    tag = "zones",
    security(("session_token" = [])),
    params(ZoneQuery),
    responses(
        (status = 200, description = "Filtered zone list", body = [Zone]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_zones(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
    Query(query): Query<ZoneQuery>,
) -> Json<Vec<Zone>> {
    Json(state.services.zones.list_zones(&query).await)
}

/// Zone detail lookup by short code
#[utoipa::path(
    get,
    path = "/zones/{id}",
    tag = "zones",
    security(("session_token" = [])),
    params(
        ("id" = String, Path, description = "Zone code")
    ),
    responses(
        (status = 200, description = "Zone details", body = Zone),
        (status = 404, description = "Zone not found")
    )
)]
pub async fn get_zone(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
    Path(id): Path<String>,
) -> AppResult<Json<Zone>> {
    let zone = state.services.zones.get_zone(&id).await?;
    Ok(Json(zone))
}

/// Add a zone
#[utoipa::path(
    post,
    path = "/zones",
    tag = "zones",
    security(("session_token" = [])),
    request_body = CreateZone,
    responses(
        (status = 201, description = "Zone created", body = Zone),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Zone id or name already exists")
    )
)]
pub async fn create_zone(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
    Json(payload): Json<CreateZone>,
) -> AppResult<(StatusCode, Json<Zone>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let zone = state.services.zones.add_zone(payload).await?;
    Ok((StatusCode::CREATED, Json(zone)))
}
