//! Zone records service

use crate::{
    error::AppResult,
    models::zone::{CreateZone, Zone, ZoneQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct ZonesService {
    repository: Repository,
}

impl ZonesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Filtered zone listing. A storage failure degrades to an empty result
    /// so the listing stays available.
    pub async fn list_zones(&self, query: &ZoneQuery) -> Vec<Zone> {
        match self.repository.zones.search(query).await {
            Ok(zones) => zones,
            Err(e) => {
                tracing::warn!("Zone listing failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Zone detail lookup
    pub async fn get_zone(&self, id: &str) -> AppResult<Zone> {
        self.repository.zones.get_by_id(id).await
    }

    /// Add a zone; zone code and name must both be unused
    pub async fn add_zone(&self, zone: CreateZone) -> AppResult<Zone> {
        self.repository.zones.create(&zone).await
    }
}
