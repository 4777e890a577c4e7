//! Guest directory service

use std::sync::Arc;

use tracing::info;

use crate::domain::guest::Guest;
use crate::domain::{Clock, DomainError, DomainResult, RepositoryProvider};

pub struct GuestService {
    repos: Arc<dyn RepositoryProvider>,
    clock: Arc<dyn Clock>,
}

impl GuestService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, clock: Arc<dyn Clock>) -> Self {
        Self { repos, clock }
    }

    pub async fn add_guest(&self, name: &str) -> DomainResult<Guest> {
        let saved = self
            .repos
            .guests()
            .save(Guest::new(name, self.clock.now()))
            .await?;
        info!("Guest {} added: {}", saved.id, saved.name);
        Ok(saved)
    }

    pub async fn find_guest_by_id(&self, guest_id: i64) -> DomainResult<Guest> {
        self.repos
            .guests()
            .find_by_id(guest_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Guest", "id", guest_id))
    }

    /// All guests, or only those matching a name exactly.
    pub async fn list_guests(&self, name: Option<&str>) -> DomainResult<Vec<Guest>> {
        match name {
            Some(name) => self.repos.guests().find_by_name(name).await,
            None => self.repos.guests().find_all().await,
        }
    }

    pub async fn update_guest(&self, guest_id: i64, name: &str) -> DomainResult<Guest> {
        let mut guest = self.find_guest_by_id(guest_id).await?;
        guest.name = name.to_string();
        self.repos.guests().update(guest).await
    }

    pub async fn delete_guest(&self, guest_id: i64) -> DomainResult<()> {
        self.repos.guests().delete(guest_id).await?;
        info!("Guest {} deleted", guest_id);
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::clock::FixedClock;
    use crate::infrastructure::memory::InMemoryRepositoryProvider;

    fn service() -> GuestService {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        GuestService::new(repos, Arc::new(FixedClock(now)))
    }

    #[tokio::test]
    async fn add_then_find_roundtrip() {
        let service = service();
        let added = service.add_guest("Serena").await.unwrap();

        let found = service.find_guest_by_id(added.id).await.unwrap();
        assert_eq!(found.name, "Serena");
    }

    #[tokio::test]
    async fn missing_guest_is_not_found() {
        let service = service();
        assert!(service.find_guest_by_id(99).await.is_err());
        assert!(service.update_guest(99, "Nobody").await.is_err());
        assert!(service.delete_guest(99).await.is_err());
    }

    #[tokio::test]
    async fn list_filters_by_exact_name() {
        let service = service();
        service.add_guest("Venus").await.unwrap();
        service.add_guest("Serena").await.unwrap();
        service.add_guest("Serena").await.unwrap();

        assert_eq!(service.list_guests(None).await.unwrap().len(), 3);
        assert_eq!(
            service.list_guests(Some("Serena")).await.unwrap().len(),
            2
        );
        assert!(service.list_guests(Some("Rafa")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_renames_and_delete_removes() {
        let service = service();
        let guest = service.add_guest("Andy").await.unwrap();

        let renamed = service.update_guest(guest.id, "Sir Andy").await.unwrap();
        assert_eq!(renamed.name, "Sir Andy");

        service.delete_guest(guest.id).await.unwrap();
        assert!(service.find_guest_by_id(guest.id).await.is_err());
    }
}
