use super::entity::Aquarium;
use super::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

/// Document-style persistence for aquariums.
///
/// Likes and comments live inside the aquarium record, so callers load the
/// whole aquarium, mutate it and hand it back to [`save`](Self::save). There
/// is no locking between the load and the save.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AquariumRepository: Send + Sync {
    async fn create(&self, aquarium: &Aquarium) -> Result<Aquarium, DomainError>;
    /// All aquariums, newest first.
    async fn find_all(&self) -> Result<Vec<Aquarium>, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Aquarium>, DomainError>;
    /// Persist the likes and comments of an existing aquarium.
    async fn save(&self, aquarium: &Aquarium) -> Result<(), DomainError>;
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}
