//! Reservation repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::Reservation;
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a new reservation; returns it with the assigned id.
    ///
    /// Implementations must reject a second `READY_TO_PLAY` reservation for
    /// the same schedule atomically (unique constraint or equivalent) and
    /// surface the race as `DomainError::Conflict`.
    async fn save(&self, reservation: Reservation) -> DomainResult<Reservation>;

    /// Persist a status/value mutation of an existing reservation.
    async fn update(&self, reservation: Reservation) -> DomainResult<Reservation>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Reservation>>;

    /// All reservations ever made for a schedule slot (any status)
    async fn find_for_schedule(&self, schedule_id: i64) -> DomainResult<Vec<Reservation>>;

    /// Reservations whose slot starts at or before the given instant
    async fn find_starting_at_or_before(
        &self,
        instant: DateTime<Utc>,
    ) -> DomainResult<Vec<Reservation>>;
}
