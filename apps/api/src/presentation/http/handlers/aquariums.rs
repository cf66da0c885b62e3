use axum::{
    Extension, Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    application::aquariums::dto::{AddCommentRequest, CreateAquariumRequest, MessageResponse},
    domain::aquarium::{comment::Comment, entity::Aquarium, like::Like},
    presentation::http::{
        errors::AppError, extract::JsonBody, middleware::auth::AuthUser, state::AppState,
    },
};

const AQUARIUM_NOT_FOUND: &str = "Aquarium not found";
const COMMENT_NOT_FOUND: &str = "Comment does not exist";

/// Malformed ids are reported exactly like ids that do not exist.
fn parse_id(raw: &str, not_found: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(not_found.to_string()))
}

pub async fn create_aquarium(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(body): JsonBody<CreateAquariumRequest>,
) -> Result<Json<Aquarium>, AppError> {
    let body = body.normalized();
    body.validate()?;

    let aquarium = state.aquariums.create(user.id, body).await?;
    Ok(Json(aquarium))
}

pub async fn list_aquariums(State(state): State<AppState>) -> Result<Json<Vec<Aquarium>>, AppError> {
    Ok(Json(state.aquariums.list().await?))
}

pub async fn get_aquarium(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Aquarium>, AppError> {
    let id = parse_id(&id, AQUARIUM_NOT_FOUND)?;
    Ok(Json(state.aquariums.get(id).await?))
}

pub async fn delete_aquarium(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id, AQUARIUM_NOT_FOUND)?;
    state.aquariums.delete(id, user.id).await?;
    Ok(Json(MessageResponse {
        msg: "Aquarium removed".to_string(),
    }))
}

pub async fn like_aquarium(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, AppError> {
    let id = parse_id(&id, AQUARIUM_NOT_FOUND)?;
    Ok(Json(state.aquariums.like(id, user.id).await?))
}

pub async fn unlike_aquarium(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, AppError> {
    let id = parse_id(&id, AQUARIUM_NOT_FOUND)?;
    Ok(Json(state.aquariums.unlike(id, user.id).await?))
}

pub async fn add_comment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<AddCommentRequest>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let body = body.normalized();
    body.validate()?;

    let id = parse_id(&id, AQUARIUM_NOT_FOUND)?;
    Ok(Json(state.aquariums.add_comment(id, user.id, body).await?))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let id = parse_id(&id, AQUARIUM_NOT_FOUND)?;
    let comment_id = parse_id(&comment_id, COMMENT_NOT_FOUND)?;
    Ok(Json(
        state
            .aquariums
            .delete_comment(id, comment_id, user.id)
            .await?,
    ))
}
