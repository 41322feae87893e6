//! Ranger/staff model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Staff member (ranger, vet, guide, maintenance...)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Staff {
    pub id: i32,
    pub employee_id: String,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub assigned_zone: String,
    pub experience_years: i32,
    pub shift: String,
    pub role: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Short id+name representation for form selects
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StaffRef {
    pub id: i32,
    pub employee_id: String,
    pub name: String,
}

/// Hire staff request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStaff {
    #[validate(length(min = 1, max = 20, message = "Employee ID is required"))]
    pub employee_id: String,
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[validate(range(min = 18, max = 70, message = "Age must be between 18 and 70"))]
    pub age: i32,
    #[validate(length(min = 1, message = "Gender is required"))]
    pub gender: String,
    #[validate(length(min = 1, max = 2, message = "Assigned zone is required"))]
    pub assigned_zone: String,
    #[validate(range(min = 0, message = "Experience must not be negative"))]
    pub experience_years: i32,
    #[validate(length(min = 1, message = "Shift is required"))]
    pub shift: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
}

/// Staff listing filters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct StaffQuery {
    pub role: Option<String>,
    pub shift: Option<String>,
    pub category: Option<String>,
    pub assigned_zone: Option<String>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}
