//! # Courtbook
//!
//! Tennis court reservation service: booking lifecycle with a
//! time-decayed deposit refund policy, plus guest, court and schedule
//! directories.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, the reservation state machine,
//!   the refund policy, repository traits
//! - **application**: Business logic services over the repository traits
//! - **infrastructure**: SeaORM database layer and in-memory repositories
//! - **interfaces**: REST API with Swagger documentation
//! - **config**: TOML application configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::{create_api_router, AppState};
