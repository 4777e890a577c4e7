//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{CourtService, GuestService, ReservationService, ScheduleService};

use super::modules::courts::{self, CourtAppState};
use super::modules::guests::{self, GuestAppState};
use super::modules::health::{self, HealthState};
use super::modules::metrics::{self, MetricsState};
use super::modules::request_id::request_id_middleware;
use super::modules::reservations::{self, ReservationAppState};
use super::modules::schedules::{self, ScheduleAppState};

/// Unified state for all routes. Axum hands each handler its own sub-state
/// via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub reservations: Arc<ReservationService>,
    pub schedules: Arc<ScheduleService>,
    pub guests: Arc<GuestService>,
    pub courts: Arc<CourtService>,
    pub started_at: Arc<Instant>,
    pub metrics_handle: PrometheusHandle,
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<AppState> for ReservationAppState {
    fn from_ref(s: &AppState) -> Self {
        ReservationAppState {
            service: Arc::clone(&s.reservations),
        }
    }
}

impl FromRef<AppState> for ScheduleAppState {
    fn from_ref(s: &AppState) -> Self {
        ScheduleAppState {
            service: Arc::clone(&s.schedules),
        }
    }
}

impl FromRef<AppState> for GuestAppState {
    fn from_ref(s: &AppState) -> Self {
        GuestAppState {
            service: Arc::clone(&s.guests),
        }
    }
}

impl FromRef<AppState> for CourtAppState {
    fn from_ref(s: &AppState) -> Self {
        CourtAppState {
            service: Arc::clone(&s.courts),
        }
    }
}

impl FromRef<AppState> for HealthState {
    fn from_ref(s: &AppState) -> Self {
        HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<AppState> for MetricsState {
    fn from_ref(s: &AppState) -> Self {
        MetricsState {
            handle: s.metrics_handle.clone(),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Reservations
        reservations::handlers::book_reservation,
        reservations::handlers::find_reservation,
        reservations::handlers::cancel_reservation,
        reservations::handlers::reschedule_reservation,
        reservations::handlers::show_past_reservations,
        // Guests
        guests::handlers::add_guest,
        guests::handlers::find_guest,
        guests::handlers::list_guests,
        guests::handlers::update_guest,
        guests::handlers::delete_guest,
        // Courts
        courts::handlers::add_court,
        courts::handlers::find_court,
        courts::handlers::find_court_with_schedules,
        // Schedules
        schedules::handlers::add_schedule,
        schedules::handlers::find_schedule,
        schedules::handlers::find_schedules_by_dates,
    ),
    components(schemas(
        reservations::dto::CreateReservationRequest,
        reservations::dto::RescheduleReservationRequest,
        reservations::dto::ReservationDto,
        guests::dto::CreateGuestRequest,
        guests::dto::UpdateGuestRequest,
        guests::dto::GuestDto,
        courts::dto::CreateCourtRequest,
        courts::dto::CourtDto,
        courts::dto::CourtWithSchedulesDto,
        schedules::dto::CreateScheduleRequest,
        schedules::dto::ScheduleDto,
        health::handlers::HealthResponse,
        health::handlers::ComponentHealth,
    )),
    tags(
        (name = "Reservations", description = "Book, cancel and reschedule court slots"),
        (name = "Guests", description = "Guest directory"),
        (name = "Courts", description = "Court directory"),
        (name = "Schedules", description = "Slot directory"),
        (name = "Health", description = "Service health")
    ),
    info(
        title = "Courtbook API",
        description = "Tennis court reservation service"
    )
)]
struct ApiDoc;

/// Build the service router.
pub fn create_api_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::handlers::health_check))
        .route("/metrics", get(metrics::handlers::prometheus_metrics))
        // Reservations
        .route(
            "/reservations",
            post(reservations::handlers::book_reservation),
        )
        .route(
            "/reservations/history",
            get(reservations::handlers::show_past_reservations),
        )
        .route(
            "/reservations/{id}",
            get(reservations::handlers::find_reservation)
                .put(reservations::handlers::reschedule_reservation),
        )
        .route(
            "/reservations/{id}/cancel",
            put(reservations::handlers::cancel_reservation),
        )
        // Guests
        .route(
            "/guests",
            post(guests::handlers::add_guest)
                .get(guests::handlers::list_guests)
                .put(guests::handlers::update_guest),
        )
        .route(
            "/guests/{id}",
            get(guests::handlers::find_guest).delete(guests::handlers::delete_guest),
        )
        // Courts
        .route("/courts", post(courts::handlers::add_court))
        .route("/courts/{id}", get(courts::handlers::find_court))
        .route(
            "/courts/{id}/schedules",
            get(courts::handlers::find_court_with_schedules),
        )
        // Schedules
        .route(
            "/schedules",
            post(schedules::handlers::add_schedule)
                .get(schedules::handlers::find_schedules_by_dates),
        )
        .route("/schedules/{id}", get(schedules::handlers::find_schedule))
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
