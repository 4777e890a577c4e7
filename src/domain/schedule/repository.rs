//! Schedule repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::Schedule;
use crate::domain::DomainResult;

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Insert a new schedule slot; returns it with the assigned id.
    ///
    /// The same court + start pair is unique; implementations surface a
    /// duplicate as `DomainError::Conflict`.
    async fn save(&self, schedule: Schedule) -> DomainResult<Schedule>;

    /// Find schedule by ID
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Schedule>>;

    /// Slot on a court at an exact start time, if any
    async fn find_by_court_and_start(
        &self,
        tennis_court_id: i64,
        start_date_time: DateTime<Utc>,
    ) -> DomainResult<Option<Schedule>>;

    /// All slots on a court, ordered by start time
    async fn find_by_court(&self, tennis_court_id: i64) -> DomainResult<Vec<Schedule>>;

    /// Slots lying entirely within `[start, end]`
    async fn find_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<Schedule>>;
}
