//! Visitor feedback endpoints

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::feedback::{CreateFeedback, Feedback},
};

use super::{AuthenticatedVisitor, OptionalVisitor};

/// Submit feedback. Intentionally reachable anonymously; a logged-in
/// session fills in missing name/email.
#[utoipa::path(
    post,
    path = "/feedback",
    tag = "feedback",
    request_body = CreateFeedback,
    responses(
        (status = 201, description = "Feedback submitted", body = Feedback),
        (status = 400, description = "Invalid input or unknown booking id")
    )
)]
pub async fn submit_feedback(
    State(state): State<crate::AppState>,
    OptionalVisitor(identity): OptionalVisitor,
    Json(payload): Json<CreateFeedback>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let feedback = state
        .services
        .feedback
        .submit(identity.as_ref(), payload)
        .await?;

    Ok((StatusCode::CREATED, Json(feedback)))
}

/// List all feedback, newest first (admin only)
#[utoipa::path(
    get,
    path = "/feedback",
    tag = "feedback",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Feedback list", body = [Feedback]),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn list_feedback(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(claims): AuthenticatedVisitor,
) -> AppResult<Json<Vec<Feedback>>> {
    claims.require_admin()?;

    let feedback = state.services.feedback.list().await?;
    Ok(Json(feedback))
}
