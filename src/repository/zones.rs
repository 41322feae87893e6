//! Zones repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::zone::{CreateZone, Zone, ZoneQuery},
    repository::filter::{FilterBuilder, SortSpec},
};

const SORT: SortSpec = SortSpec {
    allowed: &["zone_id", "zone_name", "area", "climate", "camera_traps", "access_level"],
    default: "zone_id",
};

#[derive(Clone)]
pub struct ZonesRepository {
    pool: Pool<Postgres>,
}

impl ZonesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get zone by its short code
    pub async fn get_by_id(&self, id: &str) -> AppResult<Zone> {
        sqlx::query_as::<_, Zone>("SELECT * FROM zones WHERE zone_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Zone {} not found", id)))
    }

    /// Check if a zone code exists
    pub async fn exists(&self, id: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM zones WHERE zone_id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Search zones with optional filters and allow-listed sort
    pub async fn search(&self, query: &ZoneQuery) -> AppResult<Vec<Zone>> {
        let mut filter = FilterBuilder::new();
        filter.eq_text("climate", query.climate.as_deref());
        filter.eq_text("access_level", query.access_level.as_deref());
        filter.min_float("area", query.min_area);
        filter.max_float("area", query.max_area);
        filter.min_int("camera_traps", query.min_camera_traps);
        filter.max_int("camera_traps", query.max_camera_traps);
        filter.search(
            &["zone_name", "climate", "primary_species"],
            query.search.as_deref(),
        );

        let (sort_col, sort_dir) = SORT.resolve(query.sort_by.as_deref(), query.order.as_deref());

        let sql = format!(
            "SELECT * FROM zones WHERE {} ORDER BY {} {}",
            filter.where_clause(),
            sort_col,
            sort_dir
        );

        let zones = filter
            .bind_to(sqlx::query_as::<_, Zone>(&sql))
            .fetch_all(&self.pool)
            .await?;

        Ok(zones)
    }

    /// Create a new zone. Zone code and name are both unique.
    pub async fn create(&self, zone: &CreateZone) -> AppResult<Zone> {
        sqlx::query(
            r#"
            INSERT INTO zones (
                zone_id, zone_name, area, climate,
                camera_traps, access_level, primary_species
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&zone.id)
        .bind(&zone.name)
        .bind(zone.area)
        .bind(&zone.climate)
        .bind(zone.camera_traps)
        .bind(&zone.access_level)
        .bind(&zone.primary_species)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::on_unique_violation(
                e,
                &format!("Zone {} already exists", zone.id),
            )
        })?;

        self.get_by_id(&zone.id).await
    }

    /// Sum of all zone areas
    pub async fn total_area(&self) -> AppResult<f64> {
        let total: f64 = sqlx::query_scalar("SELECT COALESCE(SUM(area), 0) FROM zones")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// Sum of camera traps across zones
    pub async fn total_camera_traps(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(camera_traps), 0) FROM zones")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
