//! Animal model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Tracked animal population record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Animal {
    pub id: i32,
    pub name: String,
    pub species_id: i32,
    pub status: String,
    pub count: i32,
    pub habitat_zone: String,
    pub last_survey: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Short id+name representation for form selects
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AnimalRef {
    pub id: i32,
    pub name: String,
    pub habitat_zone: String,
}

/// Create animal request (direct-insert variant)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAnimal {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    pub species_id: i32,
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
    #[validate(range(min = 0, message = "Count must not be negative"))]
    pub count: i32,
    #[validate(length(min = 1, max = 2, message = "Habitat zone is required"))]
    pub habitat_zone: String,
    pub last_survey: Option<NaiveDate>,
    pub image_url: Option<String>,
}

/// Survey log request: updates the population record when the animal is
/// already tracked in the zone, creates it otherwise
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AnimalSurvey {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    pub species_id: i32,
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
    #[validate(range(min = 0, message = "Count must not be negative"))]
    pub count: i32,
    #[validate(length(min = 1, max = 2, message = "Habitat zone is required"))]
    pub habitat_zone: String,
    pub survey_date: NaiveDate,
}

/// Survey log outcome
#[derive(Debug, Serialize, ToSchema)]
pub struct SurveyOutcome {
    pub animal: Animal,
    /// true when the survey created a new population record
    pub created: bool,
    pub message: String,
}

/// Animal listing filters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct AnimalQuery {
    pub status: Option<String>,
    pub habitat_zone: Option<String>,
    pub species_id: Option<i32>,
    pub min_count: Option<i32>,
    pub max_count: Option<i32>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}
