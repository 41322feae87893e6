//! Medical checkup, treatment and feeding-log models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Veterinary checkup record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MedicalCheckup {
    pub id: i32,
    pub animal_id: i32,
    pub checkup_date: NaiveDate,
    pub vet_name: String,
    pub health_status: String,
    pub weight_kg: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCheckup {
    pub animal_id: i32,
    pub checkup_date: NaiveDate,
    #[validate(length(min = 1, max = 255, message = "Vet name is required"))]
    pub vet_name: String,
    #[validate(length(min = 1, message = "Health status is required"))]
    pub health_status: String,
    #[validate(range(min = 0.0, message = "Weight must not be negative"))]
    pub weight_kg: Option<f64>,
    pub notes: Option<String>,
}

/// Treatment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MedicalTreatment {
    pub id: i32,
    pub animal_id: i32,
    pub treatment_date: NaiveDate,
    pub diagnosis: String,
    pub medication: String,
    pub vet_name: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTreatment {
    pub animal_id: i32,
    pub treatment_date: NaiveDate,
    #[validate(length(min = 1, max = 255, message = "Diagnosis is required"))]
    pub diagnosis: String,
    #[validate(length(min = 1, max = 255, message = "Medication is required"))]
    pub medication: String,
    #[validate(length(min = 1, max = 255, message = "Vet name is required"))]
    pub vet_name: String,
    pub notes: Option<String>,
}

/// Feeding log entry, references both an animal and the staff member
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FeedingLog {
    pub id: i32,
    pub animal_id: i32,
    pub staff_id: i32,
    pub fed_at: DateTime<Utc>,
    pub food_type: String,
    pub quantity_kg: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFeedingLog {
    pub animal_id: i32,
    pub staff_id: i32,
    pub fed_at: DateTime<Utc>,
    #[validate(length(min = 1, max = 100, message = "Food type is required"))]
    pub food_type: String,
    #[validate(range(min = 0.0, message = "Quantity must not be negative"))]
    pub quantity_kg: f64,
    pub notes: Option<String>,
}

/// Checkup listing filters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct CheckupQuery {
    pub animal_id: Option<i32>,
    pub health_status: Option<String>,
    pub vet_name: Option<String>,
    pub min_weight: Option<f64>,
    pub max_weight: Option<f64>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Treatment listing filters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct TreatmentQuery {
    pub animal_id: Option<i32>,
    pub vet_name: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Feeding-log listing filters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct FeedingLogQuery {
    pub animal_id: Option<i32>,
    pub staff_id: Option<i32>,
    pub food_type: Option<String>,
    pub min_quantity: Option<f64>,
    pub max_quantity: Option<f64>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}
