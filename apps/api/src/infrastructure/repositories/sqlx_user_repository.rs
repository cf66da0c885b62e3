use crate::domain::{
    aquarium::errors::DomainError,
    user::{entity::UserProfile, repository::UserRepository},
};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn find_profile(&self, id: Uuid) -> Result<Option<UserProfile>, DomainError> {
        sqlx::query_as::<_, UserProfile>("SELECT id, name, avatar FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}
