//! Medical records service: checkups, treatments, feeding logs

use crate::{
    error::AppResult,
    models::medical::{
        CheckupQuery, CreateCheckup, CreateFeedingLog, CreateTreatment, FeedingLog,
        FeedingLogQuery, MedicalCheckup, MedicalTreatment, TreatmentQuery,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct MedicalService {
    repository: Repository,
}

impl MedicalService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Filtered checkup listing; a storage failure degrades to an empty result
    pub async fn list_checkups(&self, query: &CheckupQuery) -> Vec<MedicalCheckup> {
        match self.repository.medical.search_checkups(query).await {
            Ok(checkups) => checkups,
            Err(e) => {
                tracing::warn!("Checkup listing failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Filtered treatment listing; a storage failure degrades to an empty result
    pub async fn list_treatments(&self, query: &TreatmentQuery) -> Vec<MedicalTreatment> {
        match self.repository.medical.search_treatments(query).await {
            Ok(treatments) => treatments,
            Err(e) => {
                tracing::warn!("Treatment listing failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Filtered feeding-log listing; a storage failure degrades to an empty result
    pub async fn list_feeding_logs(&self, query: &FeedingLogQuery) -> Vec<FeedingLog> {
        match self.repository.medical.search_feeding_logs(query).await {
            Ok(logs) => logs,
            Err(e) => {
                tracing::warn!("Feeding log listing failed: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn add_checkup(&self, checkup: CreateCheckup) -> AppResult<MedicalCheckup> {
        self.repository.medical.create_checkup(&checkup).await
    }

    pub async fn add_treatment(&self, treatment: CreateTreatment) -> AppResult<MedicalTreatment> {
        self.repository.medical.create_treatment(&treatment).await
    }

    pub async fn add_feeding_log(&self, log: CreateFeedingLog) -> AppResult<FeedingLog> {
        self.repository.medical.create_feeding_log(&log).await
    }
}
