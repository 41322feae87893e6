//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{animals, auth, bookings, dashboard, feedback, health, medical, staff, visitors, zones};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aranya API",
        version = "0.3.0",
        description = "Wildlife Reserve Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Aranya Reserve", email = "dev@aranya-reserve.org")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::logout,
        auth::me,
        // Visitors
        visitors::list_visitors,
        visitors::my_profile,
        // Animals
        animals::list_animals,
        animals::lookup_animals,
        animals::create_animal,
        animals::log_survey,
        // Zones
        zones::list_zones,
        zones::get_zone,
        zones::create_zone,
        // Staff
        staff::list_staff,
        staff::lookup_staff,
        staff::create_staff,
        // Bookings
        bookings::create_booking,
        bookings::list_bookings,
        bookings::booking_analytics,
        // Feedback
        feedback::submit_feedback,
        feedback::list_feedback,
        // Medical
        medical::list_checkups,
        medical::create_checkup,
        medical::list_treatments,
        medical::create_treatment,
        medical::list_feeding_logs,
        medical::create_feeding_log,
        // Dashboard
        dashboard::get_dashboard,
    ),
    components(
        schemas(
            // Auth
            crate::models::visitor::Visitor,
            crate::models::visitor::RegisterVisitor,
            crate::models::visitor::LoginRequest,
            crate::models::visitor::LoginResponse,
            crate::models::visitor::Role,
            auth::SessionInfo,
            // Animals
            crate::models::animal::Animal,
            crate::models::animal::AnimalRef,
            crate::models::animal::CreateAnimal,
            crate::models::animal::AnimalSurvey,
            crate::models::animal::SurveyOutcome,
            // Zones
            crate::models::zone::Zone,
            crate::models::zone::CreateZone,
            // Staff
            crate::models::staff::Staff,
            crate::models::staff::StaffRef,
            crate::models::staff::CreateStaff,
            // Bookings
            crate::models::booking::Ticket,
            crate::models::booking::CreateBooking,
            crate::models::booking::CostBreakdown,
            crate::models::booking::BookingConfirmation,
            crate::models::booking::BookingStatistics,
            crate::models::booking::ZoneBookingStats,
            crate::models::booking::BookingAnalytics,
            // Feedback
            crate::models::feedback::Feedback,
            crate::models::feedback::CreateFeedback,
            // Medical
            crate::models::medical::MedicalCheckup,
            crate::models::medical::CreateCheckup,
            crate::models::medical::MedicalTreatment,
            crate::models::medical::CreateTreatment,
            crate::models::medical::FeedingLog,
            crate::models::medical::CreateFeedingLog,
            // Dashboard
            dashboard::DashboardStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "visitors", description = "Visitor accounts"),
        (name = "animals", description = "Animal records"),
        (name = "zones", description = "Habitat zones"),
        (name = "staff", description = "Rangers and staff"),
        (name = "bookings", description = "Safari ticket booking"),
        (name = "feedback", description = "Visitor feedback"),
        (name = "medical", description = "Medical records"),
        (name = "dashboard", description = "Reserve dashboard")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
