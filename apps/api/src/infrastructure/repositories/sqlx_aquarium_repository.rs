use crate::domain::aquarium::{
    comment::Comment, entity::Aquarium, errors::DomainError, like::Like,
    repository::AquariumRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, types::Json};
use tracing::{debug, error, instrument};
use uuid::Uuid;

const SELECT_AQUARIUM: &str = "SELECT id, user_id, name, description, location, photo, \
     likes, comments, created_at FROM aquariums";

#[derive(FromRow)]
struct AquariumRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    description: Option<String>,
    location: Option<String>,
    photo: Option<String>,
    likes: Json<Vec<Like>>,
    comments: Json<Vec<Comment>>,
    created_at: DateTime<Utc>,
}

impl From<AquariumRow> for Aquarium {
    fn from(r: AquariumRow) -> Self {
        Aquarium {
            id: r.id,
            user_id: r.user_id,
            name: r.name,
            description: r.description,
            location: r.location,
            photo: r.photo,
            likes: r.likes.0,
            comments: r.comments.0,
            created_at: r.created_at,
        }
    }
}

fn db_error(e: sqlx::Error) -> DomainError {
    error!(database_error = %e, "aquarium query failed");
    DomainError::InfrastructureError(e.to_string())
}

pub struct SqlxAquariumRepository {
    pub pool: PgPool,
}

impl SqlxAquariumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AquariumRepository for SqlxAquariumRepository {
    #[instrument(skip(self, aquarium), fields(aquarium_id = %aquarium.id))]
    async fn create(&self, aquarium: &Aquarium) -> Result<Aquarium, DomainError> {
        let row = sqlx::query_as::<_, AquariumRow>(
            "INSERT INTO aquariums (
                id, user_id, name, description, location, photo, likes, comments, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, user_id, name, description, location, photo, likes, comments, created_at",
        )
        .bind(aquarium.id)
        .bind(aquarium.user_id)
        .bind(&aquarium.name)
        .bind(&aquarium.description)
        .bind(&aquarium.location)
        .bind(&aquarium.photo)
        .bind(Json(&aquarium.likes))
        .bind(Json(&aquarium.comments))
        .bind(aquarium.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;
        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Aquarium>, DomainError> {
        let rows = sqlx::query_as::<_, AquariumRow>(&format!(
            "{} ORDER BY created_at DESC",
            SELECT_AQUARIUM
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;
        debug!(count = rows.len(), "loaded aquariums");
        Ok(rows.into_iter().map(Aquarium::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Aquarium>, DomainError> {
        let row = sqlx::query_as::<_, AquariumRow>(&format!("{} WHERE id = $1", SELECT_AQUARIUM))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(row.map(Aquarium::from))
    }

    #[instrument(skip(self, aquarium), fields(aquarium_id = %aquarium.id))]
    async fn save(&self, aquarium: &Aquarium) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE aquariums SET likes = $2, comments = $3 WHERE id = $1")
            .bind(aquarium.id)
            .bind(Json(&aquarium.likes))
            .bind(Json(&aquarium.comments))
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Aquarium not found".to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM aquariums WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }
}
