//! Aranya Server - Wildlife Reserve Management System
//!
//! A Rust REST API server for wildlife reserve management.

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aranya_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("aranya_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Aranya Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/logout", post(api::auth::logout))
        .route("/auth/me", get(api::auth::me))
        // Visitors
        .route("/visitors", get(api::visitors::list_visitors))
        .route("/visitors/profile", get(api::visitors::my_profile))
        // Animals
        .route("/animals", get(api::animals::list_animals))
        .route("/animals", post(api::animals::create_animal))
        .route("/animals/lookup", get(api::animals::lookup_animals))
        .route("/animals/survey", post(api::animals::log_survey))
        // Zones
        .route("/zones", get(api::zones::list_zones))
        .route("/zones", post(api::zones::create_zone))
        .route("/zones/:id", get(api::zones::get_zone))
        // Staff
        .route("/staff", get(api::staff::list_staff))
        .route("/staff", post(api::staff::create_staff))
        .route("/staff/lookup", get(api::staff::lookup_staff))
        // Bookings
        .route("/bookings", post(api::bookings::create_booking))
        .route("/bookings", get(api::bookings::list_bookings))
        .route("/bookings/analytics", get(api::bookings::booking_analytics))
        // Feedback
        .route("/feedback", post(api::feedback::submit_feedback))
        .route("/feedback", get(api::feedback::list_feedback))
        // Medical records
        .route("/medical/checkups", get(api::medical::list_checkups))
        .route("/medical/checkups", post(api::medical::create_checkup))
        .route("/medical/treatments", get(api::medical::list_treatments))
        .route("/medical/treatments", post(api::medical::create_treatment))
        .route("/medical/feeding-logs", get(api::medical::list_feeding_logs))
        .route("/medical/feeding-logs", post(api::medical::create_feeding_log))
        // Dashboard
        .route("/dashboard", get(api::dashboard::get_dashboard))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
