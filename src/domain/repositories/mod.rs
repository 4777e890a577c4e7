//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::court::CourtRepository;
use super::guest::GuestRepository;
use super::reservation::ReservationRepository;
use super::schedule::ScheduleRepository;
use crate::domain::error::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let guest = repos.guests().find_by_id(1).await?;
///     let slots = repos.schedules().find_by_court(2).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn guests(&self) -> &dyn GuestRepository;
    fn courts(&self) -> &dyn CourtRepository;
    fn schedules(&self) -> &dyn ScheduleRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
}
