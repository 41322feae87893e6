//! Safari booking service.
//!
//! Cost computation and uniqueness/referential checks run in-process and the
//! ticket insert happens inside a single transaction, so a booking either
//! fully succeeds with a confirmed id or fails with a typed error.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::booking::{
        BookingAnalytics, BookingAnalyticsQuery, BookingConfirmation, CostBreakdown,
        CreateBooking, Ticket,
    },
    models::visitor::SessionClaims,
    repository::Repository,
};

/// Per-person zone entry rate (INR)
const BASE_RATE_PER_PERSON: i64 = 1500;
/// Flat guide fee per booking
const GUIDE_FEE: i64 = 600;
/// Flat camera permit fee per booking
const CAMERA_FEE: i64 = 300;
/// Lunch fee per person
const LUNCH_FEE_PER_PERSON: i64 = 250;
/// Flat transport fee per booking
const TRANSPORT_FEE: i64 = 400;
/// GST applied on base + services
const GST_PERCENT: i64 = 18;

/// Compute the cost breakdown for a trip: per-person base rate, selected
/// add-on services, GST on the subtotal.
pub fn compute_cost(booking: &CreateBooking) -> CostBreakdown {
    let persons = Decimal::from(booking.person_count);

    let base_cost = Decimal::from(BASE_RATE_PER_PERSON) * persons;

    let mut services_cost = Decimal::ZERO;
    if booking.has_guide {
        services_cost += Decimal::from(GUIDE_FEE);
    }
    if booking.has_camera {
        services_cost += Decimal::from(CAMERA_FEE);
    }
    if booking.has_lunch {
        services_cost += Decimal::from(LUNCH_FEE_PER_PERSON) * persons;
    }
    if booking.has_transport {
        services_cost += Decimal::from(TRANSPORT_FEE);
    }

    let gst_amount = ((base_cost + services_cost) * Decimal::from(GST_PERCENT)
        / Decimal::from(100))
    .round_dp(2);
    let total_amount = base_cost + services_cost + gst_amount;

    CostBreakdown {
        base_cost,
        services_cost,
        gst_amount,
        total_amount,
    }
}

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Book a safari ticket for the visitor identified by email
    pub async fn book_ticket(
        &self,
        visitor_email: &str,
        booking: CreateBooking,
    ) -> AppResult<BookingConfirmation> {
        let visitor = self
            .repository
            .visitors
            .get_by_email(visitor_email)
            .await?
            .ok_or_else(|| AppError::NotFound("Visitor not found".to_string()))?;

        if booking.safari_date < Utc::now().date_naive() {
            return Err(AppError::Validation(
                "Safari date must not be in the past".to_string(),
            ));
        }

        if !self.repository.zones.exists(&booking.safari_zone).await? {
            return Err(AppError::BadRequest("Safari zone does not exist".to_string()));
        }

        let cost = compute_cost(&booking);
        let ticket = self
            .repository
            .bookings
            .create(visitor.id, &booking, &cost)
            .await?;

        let message = format!(
            "Booking {} confirmed for zone {} on {} ({})",
            ticket.booking_id, ticket.safari_zone, ticket.safari_date, ticket.time_slot
        );

        Ok(BookingConfirmation {
            booking_id: ticket.booking_id,
            message,
            safari_date: ticket.safari_date,
            time_slot: ticket.time_slot,
            safari_zone: ticket.safari_zone,
            person_count: ticket.person_count,
            cost,
        })
    }

    /// Tickets visible to the session: admins see all, visitors their own
    pub async fn list_tickets(&self, claims: &SessionClaims) -> AppResult<Vec<Ticket>> {
        if claims.is_admin() {
            self.repository.bookings.list_all().await
        } else {
            self.repository.bookings.list_for_visitor(claims.id).await
        }
    }

    /// Filtered booking analytics: aggregate statistics plus per-zone grouping
    pub async fn analytics(&self, query: &BookingAnalyticsQuery) -> AppResult<BookingAnalytics> {
        let statistics = self.repository.bookings.statistics(query).await?;
        let zone_data = self.repository.bookings.zone_statistics(query).await?;

        Ok(BookingAnalytics {
            statistics,
            zone_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking(person_count: i32) -> CreateBooking {
        CreateBooking {
            contact_number: "9876543210".to_string(),
            safari_date: NaiveDate::from_ymd_opt(2030, 6, 15).unwrap(),
            time_slot: "morning".to_string(),
            safari_zone: "A".to_string(),
            person_count,
            has_guide: false,
            has_camera: false,
            has_lunch: false,
            has_transport: false,
        }
    }

    #[test]
    fn test_base_cost_scales_with_person_count() {
        let cost = compute_cost(&booking(3));
        assert_eq!(cost.base_cost, Decimal::from(4500));
        assert_eq!(cost.services_cost, Decimal::ZERO);
        assert_eq!(cost.gst_amount, Decimal::from(810));
        assert_eq!(cost.total_amount, Decimal::from(5310));
    }

    #[test]
    fn test_services_and_gst() {
        let mut b = booking(2);
        b.has_guide = true;
        b.has_lunch = true;
        let cost = compute_cost(&b);
        // guide 600 + lunch 2 x 250
        assert_eq!(cost.services_cost, Decimal::from(1100));
        // 18% of 3000 + 1100
        assert_eq!(cost.gst_amount, Decimal::from(738));
        assert_eq!(cost.total_amount, Decimal::from(4938));
    }

    #[test]
    fn test_total_is_sum_of_parts() {
        let mut b = booking(5);
        b.has_guide = true;
        b.has_camera = true;
        b.has_lunch = true;
        b.has_transport = true;
        let cost = compute_cost(&b);
        assert_eq!(
            cost.total_amount,
            cost.base_cost + cost.services_cost + cost.gst_amount
        );
    }
}
