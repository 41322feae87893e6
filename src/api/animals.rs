//! Animal record endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::animal::{Animal, AnimalQuery, AnimalRef, AnimalSurvey, CreateAnimal, SurveyOutcome},
};

use super::AuthenticatedVisitor;

/// List animals with optional filters and sort
#[utoipa::path(
    get,
    path = "/animals",
    tag = "animals",
    security(("session_token" = [])),
    params(AnimalQuery),
    responses(
        (status = 200, description = "Filtered animal list", body = [Animal]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_animals(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
    Query(query): Query<AnimalQuery>,
) -> Json<Vec<Animal>> {
    Json(state.services.animals.list_animals(&query).await)
}

/// Id+name lookup list for form selects
#[utoipa::path(
    get,
    path = "/animals/lookup",
    tag = "animals",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Animal references", body = [AnimalRef]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn lookup_animals(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
) -> AppResult<Json<Vec<AnimalRef>>> {
    let refs = state.services.animals.lookup().await?;
    Ok(Json(refs))
}

/// Add an animal record
#[utoipa::path(
    post,
    path = "/animals",
    tag = "animals",
    security(("session_token" = [])),
    request_body = CreateAnimal,
    responses(
        (status = 201, description = "Animal created", body = Animal),
        (status = 400, description = "Invalid input or unknown zone"),
        (status = 409, description = "Animal already tracked in zone")
    )
)]
pub async fn create_animal(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
    Json(payload): Json<CreateAnimal>,
) -> AppResult<(StatusCode, Json<Animal>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let animal = state.services.animals.add_animal(payload).await?;
    Ok((StatusCode::CREATED, Json(animal)))
}

/// Log a population survey (creates or updates the tracked record)
#[utoipa::path(
    post,
    path = "/animals/survey",
    tag = "animals",
    security(("session_token" = [])),
    request_body = AnimalSurvey,
    responses(
        (status = 200, description = "Survey recorded", body = SurveyOutcome),
        (status = 400, description = "Invalid input or unknown zone")
    )
)]
pub async fn log_survey(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(_claims): AuthenticatedVisitor,
    Json(payload): Json<AnimalSurvey>,
) -> AppResult<Json<SurveyOutcome>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let outcome = state.services.animals.log_survey(payload).await?;
    Ok(Json(outcome))
}
