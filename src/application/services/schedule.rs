//! Schedule slot management service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::schedule::Schedule;
use crate::domain::{Clock, DomainError, DomainResult, RepositoryProvider};

pub struct ScheduleService {
    repos: Arc<dyn RepositoryProvider>,
    clock: Arc<dyn Clock>,
}

impl ScheduleService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, clock: Arc<dyn Clock>) -> Self {
        Self { repos, clock }
    }

    /// Open a new slot on a court.
    ///
    /// The start must be strictly in the future, the court must exist, and
    /// the court cannot already have a slot at that start time. The end
    /// time is fixed at start + play time.
    pub async fn add_schedule(
        &self,
        tennis_court_id: i64,
        start_date_time: DateTime<Utc>,
    ) -> DomainResult<Schedule> {
        if start_date_time <= self.clock.now() {
            return Err(DomainError::InvalidRequest(
                "start date and time is in the past".to_string(),
            ));
        }

        let court = self
            .repos
            .courts()
            .find_by_id(tennis_court_id)
            .await?
            .ok_or_else(|| DomainError::not_found("TennisCourt", "id", tennis_court_id))?;

        if self
            .repos
            .schedules()
            .find_by_court_and_start(court.id, start_date_time)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(format!(
                "the schedule slot is already taken: {}",
                start_date_time
            )));
        }

        let saved = self
            .repos
            .schedules()
            .save(Schedule::for_court(court.id, start_date_time))
            .await?;
        info!(
            "Schedule {} opened: court {} at {}",
            saved.id, court.id, saved.start_date_time
        );
        Ok(saved)
    }

    pub async fn find_schedule(&self, schedule_id: i64) -> DomainResult<Schedule> {
        self.repos
            .schedules()
            .find_by_id(schedule_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Schedule", "id", schedule_id))
    }

    /// Slots lying entirely within `[start, end]`.
    pub async fn find_schedules_by_dates(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<Schedule>> {
        self.repos.schedules().find_between(start, end).await
    }

    pub async fn find_schedules_by_court(
        &self,
        tennis_court_id: i64,
    ) -> DomainResult<Vec<Schedule>> {
        self.repos.schedules().find_by_court(tennis_court_id).await
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    use crate::domain::clock::FixedClock;
    use crate::domain::court::TennisCourt;
    use crate::infrastructure::memory::InMemoryRepositoryProvider;

    fn base_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
    }

    async fn fixture() -> (Arc<InMemoryRepositoryProvider>, ScheduleService, TennisCourt) {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let service = ScheduleService::new(repos.clone(), Arc::new(FixedClock(base_now())));
        let court = repos
            .courts()
            .save(TennisCourt::new("Court 1", base_now()))
            .await
            .unwrap();
        (repos, service, court)
    }

    #[tokio::test]
    async fn slot_gets_the_fixed_play_time() {
        let (_repos, service, court) = fixture().await;
        let start = base_now() + Duration::hours(4);

        let slot = service.add_schedule(court.id, start).await.unwrap();

        assert_eq!(slot.start_date_time, start);
        assert_eq!(slot.end_date_time, start + Duration::hours(1));
    }

    #[tokio::test]
    async fn past_start_is_rejected_before_anything_else() {
        let (_repos, service, _court) = fixture().await;

        // court 999 does not exist, but the stale start fails first
        let err = service
            .add_schedule(999, base_now() - Duration::hours(1))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn unknown_court_is_not_found() {
        let (_repos, service, _court) = fixture().await;

        let err = service
            .add_schedule(999, base_now() + Duration::hours(1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound {
                entity: "TennisCourt",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn duplicate_slot_on_a_court_conflicts() {
        let (_repos, service, court) = fixture().await;
        let start = base_now() + Duration::hours(4);
        service.add_schedule(court.id, start).await.unwrap();

        let err = service.add_schedule(court.id, start).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn date_range_query_keeps_only_fully_contained_slots() {
        let (_repos, service, court) = fixture().await;
        let inside = service
            .add_schedule(court.id, base_now() + Duration::hours(2))
            .await
            .unwrap();
        service
            .add_schedule(court.id, base_now() + Duration::days(3))
            .await
            .unwrap();

        let found = service
            .find_schedules_by_dates(base_now(), base_now() + Duration::days(1))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, inside.id);
    }

    #[tokio::test]
    async fn court_slots_come_back_ordered_by_start() {
        let (_repos, service, court) = fixture().await;
        let late = service
            .add_schedule(court.id, base_now() + Duration::hours(8))
            .await
            .unwrap();
        let early = service
            .add_schedule(court.id, base_now() + Duration::hours(2))
            .await
            .unwrap();

        let slots = service.find_schedules_by_court(court.id).await.unwrap();
        assert_eq!(
            slots.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![early.id, late.id]
        );
    }
}
