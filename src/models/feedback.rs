//! Visitor feedback model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Internal row structure (sightings/liked_most as serialized JSON text)
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackRow {
    id: i32,
    name: String,
    email: String,
    visit_date: NaiveDate,
    booking_id: Option<String>,
    rating_overall: i16,
    rating_guide: Option<i16>,
    rating_facility: Option<i16>,
    sightings: String,
    liked_most: String,
    comments: Option<String>,
    recommend: String,
    submitted_at: DateTime<Utc>,
}

impl From<FeedbackRow> for Feedback {
    fn from(row: FeedbackRow) -> Self {
        Feedback {
            id: row.id,
            name: row.name,
            email: row.email,
            visit_date: row.visit_date,
            booking_id: row.booking_id,
            rating_overall: row.rating_overall,
            rating_guide: row.rating_guide,
            rating_facility: row.rating_facility,
            sightings: serde_json::from_str(&row.sightings).unwrap_or_default(),
            liked_most: serde_json::from_str(&row.liked_most).unwrap_or_default(),
            comments: row.comments,
            recommend: row.recommend == "yes",
            submitted_at: row.submitted_at,
        }
    }
}

/// Post-visit feedback tied to a booking
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Feedback {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub visit_date: NaiveDate,
    pub booking_id: Option<String>,
    pub rating_overall: i16,
    pub rating_guide: Option<i16>,
    pub rating_facility: Option<i16>,
    pub sightings: Vec<String>,
    pub liked_most: Vec<String>,
    pub comments: Option<String>,
    pub recommend: bool,
    pub submitted_at: DateTime<Utc>,
}

/// Submit feedback request. Reachable anonymously; name and email default
/// to the session identity when omitted.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFeedback {
    #[validate(length(min = 1, max = 255, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub visit_date: NaiveDate,
    pub booking_id: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Overall rating must be 1-5"))]
    pub rating_overall: i16,
    #[validate(range(min = 1, max = 5, message = "Guide rating must be 1-5"))]
    pub rating_guide: Option<i16>,
    #[validate(range(min = 1, max = 5, message = "Facility rating must be 1-5"))]
    pub rating_facility: Option<i16>,
    #[serde(default)]
    pub sightings: Vec<String>,
    #[serde(default)]
    pub liked_most: Vec<String>,
    pub comments: Option<String>,
    #[serde(default = "default_recommend")]
    pub recommend: bool,
}

fn default_recommend() -> bool {
    true
}
