//! Tennis court directory service

use std::sync::Arc;

use tracing::info;

use crate::domain::court::TennisCourt;
use crate::domain::schedule::Schedule;
use crate::domain::{Clock, DomainError, DomainResult, RepositoryProvider};

pub struct CourtService {
    repos: Arc<dyn RepositoryProvider>,
    clock: Arc<dyn Clock>,
}

impl CourtService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, clock: Arc<dyn Clock>) -> Self {
        Self { repos, clock }
    }

    pub async fn add_court(&self, name: &str) -> DomainResult<TennisCourt> {
        let saved = self
            .repos
            .courts()
            .save(TennisCourt::new(name, self.clock.now()))
            .await?;
        info!("Tennis court {} added: {}", saved.id, saved.name);
        Ok(saved)
    }

    pub async fn find_court_by_id(&self, court_id: i64) -> DomainResult<TennisCourt> {
        self.repos
            .courts()
            .find_by_id(court_id)
            .await?
            .ok_or_else(|| DomainError::not_found("TennisCourt", "id", court_id))
    }

    /// Court plus all its slots, ordered by start time.
    pub async fn find_court_with_schedules(
        &self,
        court_id: i64,
    ) -> DomainResult<(TennisCourt, Vec<Schedule>)> {
        let court = self.find_court_by_id(court_id).await?;
        let schedules = self.repos.schedules().find_by_court(court.id).await?;
        Ok((court, schedules))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use crate::domain::clock::FixedClock;
    use crate::infrastructure::memory::InMemoryRepositoryProvider;

    fn base_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
    }

    fn fixture() -> (Arc<InMemoryRepositoryProvider>, CourtService) {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let service = CourtService::new(repos.clone(), Arc::new(FixedClock(base_now())));
        (repos, service)
    }

    #[tokio::test]
    async fn add_then_find_roundtrip() {
        let (_repos, service) = fixture();
        let court = service.add_court("Court 2").await.unwrap();
        assert_eq!(
            service.find_court_by_id(court.id).await.unwrap().name,
            "Court 2"
        );
    }

    #[tokio::test]
    async fn missing_court_is_not_found() {
        let (_repos, service) = fixture();
        assert!(service.find_court_by_id(404).await.is_err());
    }

    #[tokio::test]
    async fn court_with_schedules_carries_its_slots() {
        let (repos, service) = fixture();
        let court = service.add_court("Court 3").await.unwrap();
        repos
            .schedules()
            .save(Schedule::for_court(
                court.id,
                base_now() + Duration::hours(2),
            ))
            .await
            .unwrap();

        let (found, slots) = service.find_court_with_schedules(court.id).await.unwrap();
        assert_eq!(found.id, court.id);
        assert_eq!(slots.len(), 1);
    }
}
