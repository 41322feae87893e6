//! Aranya Wildlife Reserve Management System
//!
//! A Rust REST API server for a wildlife reserve management console:
//! visitor accounts, safari ticket booking, animal/zone/staff records,
//! medical logs and feedback.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
