//! Staff records service

use crate::{
    error::AppResult,
    models::staff::{CreateStaff, Staff, StaffQuery, StaffRef},
    repository::Repository,
};

#[derive(Clone)]
pub struct StaffService {
    repository: Repository,
}

impl StaffService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Filtered staff listing. A storage failure degrades to an empty result
    /// so the listing stays available.
    pub async fn list_staff(&self, query: &StaffQuery) -> Vec<Staff> {
        match self.repository.staff.search(query).await {
            Ok(staff) => staff,
            Err(e) => {
                tracing::warn!("Staff listing failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Id+name lookup list for form selects
    pub async fn lookup(&self) -> AppResult<Vec<StaffRef>> {
        self.repository.staff.lookup().await
    }

    /// Hire a staff member; the employee id must be unused
    pub async fn hire(&self, staff: CreateStaff) -> AppResult<Staff> {
        self.repository.staff.create(&staff).await
    }
}
