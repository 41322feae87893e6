//! Medical record endpoints: checkups, treatments, feeding logs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::medical::{
        CheckupQuery, CreateCheckup, CreateFeedingLog, CreateTreatment, FeedingLog,
        FeedingLogQuery, MedicalCheckup, MedicalTreatment, TreatmentQuery,
    },
};

use super::AuthenticatedVisitor;

/// List checkups with optional filters and sort
#[utoipa::path(
    get,
    path = "/medical/checkups",
    tag = "medical",
    security(("session_token" = [])),
    params(CheckupQuery),
    responses(
        (status = 200, description = "Filtered checkup list", body = [MedicalCheckup]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_checkups(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
    Query(query): Query<CheckupQuery>,
) -> Json<Vec<MedicalCheckup>> {
    Json(state.services.medical.list_checkups(&query).await)
}

/// Record a veterinary checkup
#[utoipa::path(
    post,
    path = "/medical/checkups",
    tag = "medical",
    security(("session_token" = [])),
    request_body = CreateCheckup,
    responses(
        (status = 201, description = "Checkup recorded", body = MedicalCheckup),
        (status = 400, description = "Invalid input or unknown animal")
    )
)]
pub async fn create_checkup(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
    Json(payload): Json<CreateCheckup>,
) -> AppResult<(StatusCode, Json<MedicalCheckup>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let checkup = state.services.medical.add_checkup(payload).await?;
    Ok((StatusCode::CREATED, Json(checkup)))
}

/// List treatments with optional filters and sort
#[utoipa::path(
    get,
    path = "/medical/treatments",
    tag = "medical",
    security(("session_token" = [])),
    params(TreatmentQuery),
    responses(
        (status = 200, description = "Filtered treatment list", body = [MedicalTreatment]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_treatments(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
    Query(query): Query<TreatmentQuery>,
) -> Json<Vec<MedicalTreatment>> {
    Json(state.services.medical.list_treatments(&query).await)
}

/// Record a treatment
#[utoipa::path(
    post,
    path = "/medical/treatments",
    tag = "medical",
    security(("session_token" = [])),
    request_body = CreateTreatment,
    responses(
        (status = 201, description = "Treatment recorded", body = MedicalTreatment),
        (status = 400, description = "Invalid input or unknown animal")
    )
)]
pub async fn create_treatment(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
    Json(payload): Json<CreateTreatment>,
) -> AppResult<(StatusCode, Json<MedicalTreatment>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let treatment = state.services.medical.add_treatment(payload).await?;
    Ok((StatusCode::CREATED, Json(treatment)))
}

/// List feeding logs with optional filters and sort
#[utoipa::path(
    get,
    path = "/medical/feeding-logs",
    tag = "medical",
    security(("session_token" = [])),
    params(FeedingLogQuery),
    responses(
        (status = 200, description = "Filtered feeding-log list", body = [FeedingLog]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_feeding_logs(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
    Query(query): Query<FeedingLogQuery>,
) -> Json<Vec<FeedingLog>> {
    Json(state.services.medical.list_feeding_logs(&query).await)
}

/// Record a feeding
#[utoipa::path(
    post,
    path = "/medical/feeding-logs",
    tag = "medical",
    security(("session_token" = [])),
    request_body = CreateFeedingLog,
    responses(
        (status = 201, description = "Feeding recorded", body = FeedingLog),
        (status = 400, description = "Invalid input, unknown animal or staff member")
    )
)]
pub async fn create_feeding_log(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
    Json(payload): Json<CreateFeedingLog>,
) -> AppResult<(StatusCode, Json<FeedingLog>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let log = state.services.medical.add_feeding_log(payload).await?;
    Ok((StatusCode::CREATED, Json(log)))
}
