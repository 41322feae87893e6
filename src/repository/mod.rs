//! Repository layer for database operations

pub mod animals;
pub mod bookings;
pub mod feedback;
pub mod filter;
pub mod medical;
pub mod staff;
pub mod visitors;
pub mod zones;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub visitors: visitors::VisitorsRepository,
    pub zones: zones::ZonesRepository,
    pub animals: animals::AnimalsRepository,
    pub staff: staff::StaffRepository,
    pub bookings: bookings::BookingsRepository,
    pub feedback: feedback::FeedbackRepository,
    pub medical: medical::MedicalRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            visitors: visitors::VisitorsRepository::new(pool.clone()),
            zones: zones::ZonesRepository::new(pool.clone()),
            animals: animals::AnimalsRepository::new(pool.clone()),
            staff: staff::StaffRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            feedback: feedback::FeedbackRepository::new(pool.clone()),
            medical: medical::MedicalRepository::new(pool.clone()),
            pool,
        }
    }
}
