//! Zone model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Habitat zone within the reserve
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Zone {
    #[sqlx(rename = "zone_id")]
    pub id: String,
    #[sqlx(rename = "zone_name")]
    pub name: String,
    pub area: f64,
    pub climate: String,
    pub camera_traps: i32,
    pub access_level: String,
    pub primary_species: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create zone request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateZone {
    #[validate(length(min = 1, max = 2, message = "Zone id must be 1-2 characters"))]
    pub id: String,
    #[validate(length(min = 1, max = 255, message = "Zone name is required"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Area must not be negative"))]
    pub area: f64,
    #[validate(length(min = 1, message = "Climate is required"))]
    pub climate: String,
    #[validate(range(min = 0, message = "Camera trap count must not be negative"))]
    pub camera_traps: i32,
    #[validate(length(min = 1, message = "Access level is required"))]
    pub access_level: String,
    #[validate(length(min = 1, message = "Primary species is required"))]
    pub primary_species: String,
}

/// Zone listing filters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ZoneQuery {
    pub climate: Option<String>,
    pub access_level: Option<String>,
    pub min_area: Option<f64>,
    pub max_area: Option<f64>,
    pub min_camera_traps: Option<i32>,
    pub max_camera_traps: Option<i32>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}
