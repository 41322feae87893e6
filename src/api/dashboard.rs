//! Dashboard endpoint

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedVisitor;

/// Reserve-wide dashboard aggregates
#[derive(Serialize, ToSchema)]
pub struct DashboardStats {
    /// Sum of tracked animal population counts
    pub total_animals: i64,
    /// Distinct species tracked
    pub species_count: i64,
    /// Total area across zones (sq km)
    pub total_zone_area: f64,
    /// Camera traps deployed across zones
    pub total_camera_traps: i64,
    /// Registered visitor accounts
    pub registered_visitors: i64,
    /// Non-cancelled bookings
    pub total_bookings: i64,
    /// Persons across non-cancelled bookings
    pub total_safari_visitors: i64,
    /// Revenue across non-cancelled bookings
    pub total_revenue: Decimal,
    /// Average overall feedback rating
    pub average_rating: f64,
    /// Visitors who would recommend the reserve
    pub recommend_count: i64,
}

/// Dashboard aggregates (admin only). Refreshes the daily analytics
/// summary row as a side effect.
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Dashboard aggregates", body = DashboardStats),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn get_dashboard(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(claims): AuthenticatedVisitor,
) -> AppResult<Json<DashboardStats>> {
    claims.require_admin()?;

    let stats = state.services.dashboard.get_stats().await?;
    Ok(Json(stats))
}
