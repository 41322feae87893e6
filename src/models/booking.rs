//! Safari ticket booking model and related types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Booked safari ticket
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Ticket {
    pub id: i32,
    pub booking_id: String,
    pub visitor_id: i32,
    pub contact_number: String,
    pub safari_date: NaiveDate,
    pub time_slot: String,
    pub safari_zone: String,
    pub person_count: i32,
    pub has_guide: bool,
    pub has_camera: bool,
    pub has_lunch: bool,
    pub has_transport: bool,
    pub base_cost: Decimal,
    pub services_cost: Decimal,
    pub gst_amount: Decimal,
    pub total_amount: Decimal,
    pub booking_status: String,
    pub created_at: DateTime<Utc>,
}

/// Book safari ticket request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    #[validate(length(equal = 10, message = "Contact number must be exactly 10 characters"))]
    pub contact_number: String,
    pub safari_date: NaiveDate,
    #[validate(length(min = 1, message = "Time slot is required"))]
    pub time_slot: String,
    #[validate(length(min = 1, max = 2, message = "Safari zone is required"))]
    pub safari_zone: String,
    #[validate(range(min = 1, max = 20, message = "Person count must be between 1 and 20"))]
    pub person_count: i32,
    #[serde(default)]
    pub has_guide: bool,
    #[serde(default)]
    pub has_camera: bool,
    #[serde(default)]
    pub has_lunch: bool,
    #[serde(default)]
    pub has_transport: bool,
}

/// Cost breakdown of a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CostBreakdown {
    pub base_cost: Decimal,
    pub services_cost: Decimal,
    pub gst_amount: Decimal,
    pub total_amount: Decimal,
}

/// Booking confirmation returned to the client
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingConfirmation {
    pub booking_id: String,
    pub message: String,
    pub safari_date: NaiveDate,
    pub time_slot: String,
    pub safari_zone: String,
    pub person_count: i32,
    pub cost: CostBreakdown,
}

/// Filters for booking analytics
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BookingAnalyticsQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub zone: Option<String>,
    pub time_slot: Option<String>,
    pub status: Option<String>,
}

/// Aggregate booking statistics
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingStatistics {
    pub total_bookings: i64,
    pub total_visitors: i64,
    pub total_revenue: Decimal,
    pub avg_group_size: Decimal,
    pub avg_booking_value: Decimal,
}

/// Per-zone booking aggregate
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct ZoneBookingStats {
    pub safari_zone: String,
    pub booking_count: i64,
    pub visitor_count: i64,
    pub revenue: Decimal,
}

/// Filtered analytics response
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingAnalytics {
    pub statistics: BookingStatistics,
    pub zone_data: Vec<ZoneBookingStats>,
}
