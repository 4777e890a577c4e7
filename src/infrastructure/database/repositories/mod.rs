//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod court_repository;
pub mod guest_repository;
pub mod repository_provider;
pub mod reservation_repository;
pub mod schedule_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

/// Map a SeaORM error into the domain taxonomy.
pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}
