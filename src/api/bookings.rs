//! Safari booking endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::booking::{
        BookingAnalytics, BookingAnalyticsQuery, BookingConfirmation, CreateBooking, Ticket,
    },
};

use super::AuthenticatedVisitor;

/// Book a safari ticket for the logged-in visitor
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    security(("session_token" = [])),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking confirmed", body = BookingConfirmation),
        (status = 400, description = "Invalid input or unknown zone"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(claims): AuthenticatedVisitor,
    Json(payload): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<BookingConfirmation>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let confirmation = state
        .services
        .bookings
        .book_ticket(&claims.email, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(confirmation)))
}

/// List tickets: admins see all bookings, visitors their own
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Ticket list", body = [Ticket]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(claims): AuthenticatedVisitor,
) -> AppResult<Json<Vec<Ticket>>> {
    let tickets = state.services.bookings.list_tickets(&claims).await?;
    Ok(Json(tickets))
}

/// Filtered booking analytics (admin only)
#[utoipa::path(
    get,
    path = "/bookings/analytics",
    tag = "bookings",
    security(("session_token" = [])),
    params(BookingAnalyticsQuery),
    responses(
        (status = 200, description = "Booking analytics", body = BookingAnalytics),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn booking_analytics(
    State(state): State<crate::AppState>,
    AuthenticatedVisitor(claims): AuthenticatedVisitor,
    Query(query): Query<BookingAnalyticsQuery>,
) -> AppResult<Json<BookingAnalytics>> {
    claims.require_admin()?;

    let analytics = state.services.bookings.analytics(&query).await?;
    Ok(Json(analytics))
}
