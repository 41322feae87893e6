//! Tickets repository: booking creation, listings and aggregates

use rust_decimal::Decimal;
use sqlx::{FromRow, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::booking::{
        BookingAnalyticsQuery, BookingStatistics, CostBreakdown, CreateBooking, Ticket,
        ZoneBookingStats,
    },
    repository::filter::FilterBuilder,
};

#[derive(Debug, FromRow)]
struct StatisticsRow {
    total_bookings: i64,
    total_visitors: i64,
    total_revenue: Decimal,
    avg_group_size: Decimal,
    avg_booking_value: Decimal,
}

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get ticket by its booking code
    pub async fn get_by_booking_id(&self, booking_id: &str) -> AppResult<Ticket> {
        sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE booking_id = $1")
            .bind(booking_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))
    }

    /// Create a ticket inside a single transaction. The booking code is
    /// derived from the reserved row id, so the id the client receives is
    /// the one the database actually stored.
    pub async fn create(
        &self,
        visitor_id: i32,
        booking: &CreateBooking,
        cost: &CostBreakdown,
    ) -> AppResult<Ticket> {
        let mut tx = self.pool.begin().await?;

        let id: i32 = sqlx::query_scalar(
            "SELECT nextval(pg_get_serial_sequence('tickets', 'id'))::int",
        )
        .fetch_one(&mut *tx)
        .await?;

        let booking_id = format!("SAF-{:06}", id);

        sqlx::query(
            r#"
            INSERT INTO tickets (
                id, booking_id, visitor_id, contact_number,
                safari_date, time_slot, safari_zone, person_count,
                has_guide, has_camera, has_lunch, has_transport,
                base_cost, services_cost, gst_amount, total_amount
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8,
                $9, $10, $11, $12, $13, $14, $15, $16
            )
            "#,
        )
        .bind(id)
        .bind(&booking_id)
        .bind(visitor_id)
        .bind(&booking.contact_number)
        .bind(booking.safari_date)
        .bind(&booking.time_slot)
        .bind(&booking.safari_zone)
        .bind(booking.person_count)
        .bind(booking.has_guide)
        .bind(booking.has_camera)
        .bind(booking.has_lunch)
        .bind(booking.has_transport)
        .bind(cost.base_cost)
        .bind(cost.services_cost)
        .bind(cost.gst_amount)
        .bind(cost.total_amount)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::on_fk_violation(e, "Safari zone does not exist"))?;

        let ticket = sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE id = $1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(ticket)
    }

    /// All tickets, newest safari date first
    pub async fn list_all(&self) -> AppResult<Vec<Ticket>> {
        let tickets =
            sqlx::query_as::<_, Ticket>("SELECT * FROM tickets ORDER BY safari_date DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(tickets)
    }

    /// Tickets booked by one visitor, newest safari date first
    pub async fn list_for_visitor(&self, visitor_id: i32) -> AppResult<Vec<Ticket>> {
        let tickets = sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE visitor_id = $1 ORDER BY safari_date DESC",
        )
        .bind(visitor_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(tickets)
    }

    fn analytics_filter(query: &BookingAnalyticsQuery) -> FilterBuilder {
        let mut filter = FilterBuilder::new();
        filter.min_date("safari_date", query.start_date);
        filter.max_date("safari_date", query.end_date);
        filter.eq_text("safari_zone", query.zone.as_deref());
        filter.eq_text("time_slot", query.time_slot.as_deref());
        // Explicit status filter replaces the default non-cancelled view
        match query.status.as_deref() {
            Some(status) => filter.eq_text("booking_status", Some(status)),
            None => filter.raw("booking_status != 'cancelled'"),
        }
        filter
    }

    /// Aggregate booking statistics over the filtered ticket set
    pub async fn statistics(&self, query: &BookingAnalyticsQuery) -> AppResult<BookingStatistics> {
        let filter = Self::analytics_filter(query);

        let sql = format!(
            r#"
            SELECT COUNT(*) as total_bookings,
                   COALESCE(SUM(person_count), 0) as total_visitors,
                   COALESCE(SUM(total_amount), 0) as total_revenue,
                   COALESCE(AVG(person_count), 0) as avg_group_size,
                   COALESCE(AVG(total_amount), 0) as avg_booking_value
            FROM tickets
            WHERE {}
            "#,
            filter.where_clause()
        );

        let row = filter
            .bind_to(sqlx::query_as::<_, StatisticsRow>(&sql))
            .fetch_one(&self.pool)
            .await?;

        Ok(BookingStatistics {
            total_bookings: row.total_bookings,
            total_visitors: row.total_visitors,
            total_revenue: row.total_revenue,
            avg_group_size: row.avg_group_size.round_dp(2),
            avg_booking_value: row.avg_booking_value.round_dp(2),
        })
    }

    /// Per-zone booking aggregates over the filtered ticket set
    pub async fn zone_statistics(
        &self,
        query: &BookingAnalyticsQuery,
    ) -> AppResult<Vec<ZoneBookingStats>> {
        let filter = Self::analytics_filter(query);

        let sql = format!(
            r#"
            SELECT safari_zone,
                   COUNT(*) as booking_count,
                   COALESCE(SUM(person_count), 0) as visitor_count,
                   COALESCE(SUM(total_amount), 0) as revenue
            FROM tickets
            WHERE {}
            GROUP BY safari_zone
            ORDER BY booking_count DESC
            "#,
            filter.where_clause()
        );

        let rows = filter
            .bind_to(sqlx::query_as::<_, ZoneBookingStats>(&sql))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Count non-cancelled bookings
    pub async fn total_bookings(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tickets WHERE booking_status != 'cancelled'",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Sum of person counts across non-cancelled bookings
    pub async fn total_visitors(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(person_count), 0) FROM tickets WHERE booking_status != 'cancelled'",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    /// Revenue across non-cancelled bookings
    pub async fn total_revenue(&self) -> AppResult<Decimal> {
        let total: Decimal = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total_amount), 0) FROM tickets WHERE booking_status != 'cancelled'",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    /// Upsert today's row in the analytics summary table
    pub async fn refresh_daily_summary(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO visitor_analytics_summary (
                summary_date, total_bookings, total_visitors, total_revenue,
                avg_group_size, most_popular_zone, most_popular_time_slot
            )
            SELECT CURRENT_DATE,
                   COUNT(*),
                   COALESCE(SUM(person_count), 0),
                   COALESCE(SUM(total_amount), 0),
                   COALESCE(AVG(person_count), 0),
                   (SELECT safari_zone FROM tickets
                    WHERE safari_date = CURRENT_DATE AND booking_status != 'cancelled'
                    GROUP BY safari_zone ORDER BY COUNT(*) DESC LIMIT 1),
                   (SELECT time_slot FROM tickets
                    WHERE safari_date = CURRENT_DATE AND booking_status != 'cancelled'
                    GROUP BY time_slot ORDER BY COUNT(*) DESC LIMIT 1)
            FROM tickets
            WHERE safari_date = CURRENT_DATE AND booking_status != 'cancelled'
            ON CONFLICT (summary_date) DO UPDATE SET
                total_bookings = EXCLUDED.total_bookings,
                total_visitors = EXCLUDED.total_visitors,
                total_revenue = EXCLUDED.total_revenue,
                avg_group_size = EXCLUDED.avg_group_size,
                most_popular_zone = EXCLUDED.most_popular_zone,
                most_popular_time_slot = EXCLUDED.most_popular_time_slot,
                updated_at = NOW()
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
