//! Court repository interface

use async_trait::async_trait;

use super::model::TennisCourt;
use crate::domain::DomainResult;

#[async_trait]
pub trait CourtRepository: Send + Sync {
    /// Insert a new court; returns it with the assigned id.
    async fn save(&self, court: TennisCourt) -> DomainResult<TennisCourt>;

    /// Find court by ID
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<TennisCourt>>;
}
