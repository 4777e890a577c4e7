//! Courtbook service entry point
//!
//! Tennis court reservation REST service. Reads configuration from a TOML
//! file (~/.config/courtbook/config.toml), runs migrations, and serves the
//! API until interrupted.

use std::sync::Arc;
use std::time::Instant;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use courtbook::application::{CourtService, GuestService, ReservationService, ScheduleService};
use courtbook::domain::{Clock, RepositoryProvider, SystemClock};
use courtbook::infrastructure::database::migrator::Migrator;
use courtbook::{
    create_api_router, default_config_path, init_database, AppConfig, AppState, DatabaseConfig,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("COURTBOOK_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Courtbook reservation service...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.url.clone(),
    };
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // ── Services ───────────────────────────────────────────────
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let state = AppState {
        db,
        reservations: Arc::new(ReservationService::new(
            repos.clone(),
            clock.clone(),
            app_cfg.booking.deposit,
        )),
        schedules: Arc::new(ScheduleService::new(repos.clone(), clock.clone())),
        guests: Arc::new(GuestService::new(repos.clone(), clock.clone())),
        courts: Arc::new(CourtService::new(repos.clone(), clock.clone())),
        started_at: Arc::new(Instant::now()),
        metrics_handle: prometheus_handle,
    };

    // ── HTTP server ────────────────────────────────────────────
    let router = create_api_router(state);
    let address = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(
        "REST API listening on http://{} (Swagger UI at /swagger-ui)",
        address
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
