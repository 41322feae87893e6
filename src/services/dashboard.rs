//! Dashboard aggregates service

use crate::{api::dashboard::DashboardStats, error::AppResult, repository::Repository};

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Fetch all dashboard aggregates in parallel. The daily analytics
    /// summary row is refreshed on each load; a refresh failure is logged
    /// and does not block the dashboard.
    pub async fn get_stats(&self) -> AppResult<DashboardStats> {
        if let Err(e) = self.repository.bookings.refresh_daily_summary().await {
            tracing::warn!("Analytics summary refresh failed: {}", e);
        }

        let (
            total_animals,
            species_count,
            total_zone_area,
            total_camera_traps,
            registered_visitors,
            total_bookings,
            total_safari_visitors,
            total_revenue,
            average_rating,
            recommend_count,
        ) = tokio::try_join!(
            self.repository.animals.total_count(),
            self.repository.animals.species_count(),
            self.repository.zones.total_area(),
            self.repository.zones.total_camera_traps(),
            self.repository.visitors.count(),
            self.repository.bookings.total_bookings(),
            self.repository.bookings.total_visitors(),
            self.repository.bookings.total_revenue(),
            self.repository.feedback.average_rating(),
            self.repository.feedback.recommend_count(),
        )?;

        Ok(DashboardStats {
            total_animals,
            species_count,
            total_zone_area,
            total_camera_traps,
            registered_visitors,
            total_bookings,
            total_safari_visitors,
            total_revenue,
            average_rating,
            recommend_count,
        })
    }
}
