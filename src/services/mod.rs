//! Business logic services

pub mod animals;
pub mod auth;
pub mod bookings;
pub mod dashboard;
pub mod feedback;
pub mod medical;
pub mod staff;
pub mod zones;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub animals: animals::AnimalsService,
    pub zones: zones::ZonesService,
    pub staff: staff::StaffService,
    pub bookings: bookings::BookingsService,
    pub feedback: feedback::FeedbackService,
    pub medical: medical::MedicalService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            animals: animals::AnimalsService::new(repository.clone()),
            zones: zones::ZonesService::new(repository.clone()),
            staff: staff::StaffService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone()),
            feedback: feedback::FeedbackService::new(repository.clone()),
            medical: medical::MedicalService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(repository),
        }
    }
}
