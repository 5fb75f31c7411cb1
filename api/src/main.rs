//! Clinic booking API server
//!
//! Backend for a clinic's appointment booking: slot computation, conflict-
//! safe booking, and the appointment lifecycle, with email and webhook
//! collaborators triggered on transitions.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    HttpMailRelay, HttpWebhookSink, PostgresAdminDirectory, PostgresAppointmentRepository,
    PostgresAvailabilityRepository, PostgresSpecialistRepository, PostgresSpecialtyRepository,
};
use app::{BookingService, LifecycleService, SlotService};
use config::Config;

type PgSlotService = SlotService<
    PostgresSpecialistRepository,
    PostgresAvailabilityRepository,
    PostgresAppointmentRepository,
>;
type PgBookingService = BookingService<
    PostgresSpecialtyRepository,
    PostgresSpecialistRepository,
    PostgresAvailabilityRepository,
    PostgresAppointmentRepository,
    HttpWebhookSink,
>;
type PgLifecycleService = LifecycleService<
    PostgresSpecialtyRepository,
    PostgresSpecialistRepository,
    PostgresAvailabilityRepository,
    PostgresAppointmentRepository,
    HttpMailRelay,
    HttpWebhookSink,
>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub slot_service: Arc<PgSlotService>,
    pub booking_service: Arc<PgBookingService>,
    pub lifecycle_service: Arc<PgLifecycleService>,
    pub specialty_repo: Arc<PostgresSpecialtyRepository>,
    pub specialist_repo: Arc<PostgresSpecialistRepository>,
    pub admins: Arc<PostgresAdminDirectory>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,clinic_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting clinic API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let specialty_repo = Arc::new(PostgresSpecialtyRepository::new(db.clone()));
    let specialist_repo = Arc::new(PostgresSpecialistRepository::new(db.clone()));
    let availability_repo = Arc::new(PostgresAvailabilityRepository::new(db.clone()));
    let appointment_repo = Arc::new(PostgresAppointmentRepository::new(db.clone()));
    let admins = Arc::new(PostgresAdminDirectory::new(db.clone()));

    let webhooks = Arc::new(HttpWebhookSink::new(config.webhook_url.clone()));
    let mailer = Arc::new(HttpMailRelay::new(
        config.mail_relay_url.clone(),
        config.frontend_url.clone(),
    ));

    // Create application services
    let slot_service = Arc::new(SlotService::new(
        specialist_repo.clone(),
        availability_repo.clone(),
        appointment_repo.clone(),
    ));

    let booking_service = Arc::new(BookingService::new(
        specialty_repo.clone(),
        specialist_repo.clone(),
        slot_service.clone(),
        appointment_repo.clone(),
        webhooks.clone(),
    ));

    let lifecycle_service = Arc::new(LifecycleService::new(
        specialty_repo.clone(),
        specialist_repo.clone(),
        slot_service.clone(),
        appointment_repo.clone(),
        mailer.clone(),
        webhooks.clone(),
    ));

    // Create app state
    let state = AppState {
        slot_service,
        booking_service,
        lifecycle_service,
        specialty_repo,
        specialist_repo,
        admins,
    };

    // Rate limiting for the public booking surface: 2 req/sec sustained,
    // burst of 5, keyed by peer IP
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Rate-limited public routes (slot search + booking)
    let rate_limited_routes = Router::new()
        .route(
            "/appointments/public/available-slots",
            get(handlers::get_available_slots),
        )
        .route(
            "/appointments/public/book",
            post(handlers::book_appointment),
        )
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Admin routes behind API-key auth
    let admin_routes = Router::new()
        .route("/appointments", get(handlers::list_appointments))
        .route("/appointments/calendar", get(handlers::get_calendar))
        .route(
            "/appointments/:id",
            get(handlers::get_appointment).patch(handlers::edit_appointment),
        )
        .route(
            "/appointments/:id/confirm",
            patch(handlers::confirm_appointment),
        )
        .route(
            "/appointments/:id/complete",
            patch(handlers::complete_appointment),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    // Build router
    let app = Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Public catalog reads
        .route("/specialties", get(handlers::list_specialties))
        .route(
            "/specialties/:id/specialists",
            get(handlers::list_specialists),
        )
        // Public token-based patient self-service
        .route(
            "/appointments/public/token/:token",
            get(handlers::get_by_token),
        )
        .route(
            "/appointments/public/token/:token/cancel",
            patch(handlers::cancel_by_token),
        )
        .merge(rate_limited_routes)
        .merge(admin_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
