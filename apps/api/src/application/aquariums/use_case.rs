use super::dto::{AddCommentRequest, CreateAquariumRequest};
use crate::domain::aquarium::{
    comment::Comment, entity::Aquarium, errors::DomainError, like::Like,
    repository::AquariumRepository,
};
use crate::domain::user::{entity::UserProfile, repository::UserRepository};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Aquarium operations. Each call is one independent load-modify-save cycle
/// against the repository; concurrent writers on the same aquarium are not
/// serialized, so the last save wins.
pub struct AquariumService {
    aquariums: Arc<dyn AquariumRepository>,
    users: Arc<dyn UserRepository>,
}

impl AquariumService {
    pub fn new(aquariums: Arc<dyn AquariumRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { aquariums, users }
    }

    /// Profile of the caller. A token whose user record is gone cannot write
    /// anything that references that user.
    async fn profile(&self, caller: Uuid) -> Result<UserProfile, DomainError> {
        self.users
            .find_profile(caller)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("User not found".to_string()))
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        owner: Uuid,
        request: CreateAquariumRequest,
    ) -> Result<Aquarium, DomainError> {
        let owner = self.profile(owner).await?;
        let aquarium = Aquarium::new(owner.id, request.into());
        let created = self.aquariums.create(&aquarium).await?;
        info!(aquarium_id = %created.id, "aquarium created");
        Ok(created)
    }

    pub async fn ping(&self) -> Result<(), DomainError> {
        self.aquariums.ping().await
    }

    pub async fn list(&self) -> Result<Vec<Aquarium>, DomainError> {
        self.aquariums.find_all().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Aquarium, DomainError> {
        self.aquariums
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Aquarium not found".to_string()))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid, caller: Uuid) -> Result<(), DomainError> {
        let aquarium = self.get(id).await?;
        if !aquarium.is_owned_by(caller) {
            return Err(DomainError::Unauthorized("User not authorized".to_string()));
        }
        self.aquariums.delete(id).await?;
        info!(aquarium_id = %id, "aquarium removed");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn like(&self, id: Uuid, caller: Uuid) -> Result<Vec<Like>, DomainError> {
        let mut aquarium = self.get(id).await?;
        aquarium.like(caller)?;
        self.aquariums.save(&aquarium).await?;
        debug!(likes = aquarium.likes.len(), "aquarium liked");
        Ok(aquarium.likes)
    }

    #[instrument(skip(self))]
    pub async fn unlike(&self, id: Uuid, caller: Uuid) -> Result<Vec<Like>, DomainError> {
        let mut aquarium = self.get(id).await?;
        aquarium.unlike(caller)?;
        self.aquariums.save(&aquarium).await?;
        debug!(likes = aquarium.likes.len(), "aquarium unliked");
        Ok(aquarium.likes)
    }

    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        id: Uuid,
        caller: Uuid,
        request: AddCommentRequest,
    ) -> Result<Vec<Comment>, DomainError> {
        let author = self.profile(caller).await?;
        let mut aquarium = self.get(id).await?;

        let rating = request.star_rating();
        aquarium.add_comment(Comment::new(&author, request.text, rating));
        self.aquariums.save(&aquarium).await?;
        debug!(comments = aquarium.comments.len(), "comment added");
        Ok(aquarium.comments)
    }

    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        id: Uuid,
        comment_id: Uuid,
        caller: Uuid,
    ) -> Result<Vec<Comment>, DomainError> {
        let mut aquarium = self.get(id).await?;
        aquarium.remove_comment(comment_id, caller)?;
        self.aquariums.save(&aquarium).await?;
        debug!(comments = aquarium.comments.len(), "comment removed");
        Ok(aquarium.comments)
    }
}
