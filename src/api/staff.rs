//! Staff record endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::staff::{CreateStaff, Staff, StaffQuery, StaffRef},
};

use super::AuthenticatedVisitor;

/// List staff with optional filters and sort
#[utoipa::path(
    get,
    path = "/staff",
    tag = "staff",
    security(("session_token" = [])),
    params(StaffQuery),
    responses(
        (status = 200, description = "Filtered staff list", body = [Staff]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_staff(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
    Query(query): Query<StaffQuery>,
) -> Json<Vec<Staff>> {
    Json(state.services.staff.list_staff(&query).await)
}

/// Id+name lookup list for form selects
#[utoipa::path(
    get,
    path = "/staff/lookup",
    tag = "staff",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Staff references", body = [StaffRef]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn lookup_staff(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
) -> AppResult<Json<Vec<StaffRef>>> {
    let refs = state.services.staff.lookup().await?;
    Ok(Json(refs))
}

/// Hire a staff member
#[utoipa::path(
    post,
    path = "/staff",
    tag = "staff",
    security(("session_token" = [])),
    request_body = CreateStaff,
    responses(
        (status = 201, description = "Staff member hired", body = Staff),
        (status = 400, description = "Invalid input or unknown zone"),
        (status = 409, description = "Employee ID already exists")
    )
)]
pub async fn create_staff(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
    Json(payload): Json<CreateStaff>,
) -> AppResult<(StatusCode, Json<Staff>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let staff = state.services.staff.hire(payload).await?;
    Ok((StatusCode::CREATED, Json(staff)))
}
