use super::entity::UserProfile;
use crate::domain::aquarium::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_profile(&self, id: Uuid) -> Result<Option<UserProfile>, DomainError>;
}
