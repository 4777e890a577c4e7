//! Guest repository interface

use async_trait::async_trait;

use super::model::Guest;
use crate::domain::DomainResult;

#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Insert a new guest; returns it with the assigned id.
    async fn save(&self, guest: Guest) -> DomainResult<Guest>;

    /// Update an existing guest
    async fn update(&self, guest: Guest) -> DomainResult<Guest>;

    /// Find guest by ID
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Guest>>;

    /// Guests matching a name exactly
    async fn find_by_name(&self, name: &str) -> DomainResult<Vec<Guest>>;

    /// All guests
    async fn find_all(&self) -> DomainResult<Vec<Guest>>;

    /// Delete a guest by ID; `NotFound` if absent
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
