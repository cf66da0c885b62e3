use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::{comment::Comment, errors::DomainError, like::Like};

/// Core domain entity representing an aquarium post.
///
/// An aquarium is a user's showcase of a tank: a photo, where it lives and a
/// free-form description. Other users react to it with likes and rated
/// comments, both of which are embedded in the aquarium itself.
///
/// # Invariants
/// - `id`, `user_id` and `created_at` never change after creation
/// - a user appears at most once in `likes`
/// - `likes` and `comments` are ordered newest first
/// - a comment can only be removed by its author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Aquarium {
    /// Unique identifier assigned by the server
    pub id: Uuid,

    /// Owner of the post
    #[serde(rename = "user")]
    pub user_id: Uuid,

    /// Display name of the tank
    pub name: String,

    /// Free-form story about the tank (optional)
    pub description: Option<String>,

    /// Where the tank can be seen (optional)
    pub location: Option<String>,

    /// URL of the tank photo (optional)
    pub photo: Option<String>,

    /// Users who liked this aquarium, newest first
    pub likes: Vec<Like>,

    /// Comments left on this aquarium, newest first
    pub comments: Vec<Comment>,

    /// Timestamp when the post was created
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

/// Owner-supplied fields of a new aquarium.
#[derive(Debug, Clone, Default)]
pub struct NewAquarium {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub photo: Option<String>,
}

impl Aquarium {
    pub fn new(owner: Uuid, fields: NewAquarium) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id: owner,
            name: fields.name,
            description: fields.description,
            location: fields.location,
            photo: fields.photo,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    pub fn is_liked_by(&self, user_id: Uuid) -> bool {
        self.likes.iter().any(|like| like.user_id == user_id)
    }

    pub fn like(&mut self, user_id: Uuid) -> Result<(), DomainError> {
        if self.is_liked_by(user_id) {
            return Err(DomainError::ValidationError(
                "Aquarium already liked".to_string(),
            ));
        }
        self.likes.insert(0, Like::new(user_id));
        Ok(())
    }

    pub fn unlike(&mut self, user_id: Uuid) -> Result<(), DomainError> {
        remove_first(&mut self.likes, |like| like.user_id == user_id)
            .map(|_| ())
            .ok_or_else(|| DomainError::ValidationError("Aquarium has not been liked".to_string()))
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    /// Remove the comment with `comment_id`, provided `caller` wrote it.
    pub fn remove_comment(
        &mut self,
        comment_id: Uuid,
        caller: Uuid,
    ) -> Result<Comment, DomainError> {
        let index = self
            .comments
            .iter()
            .position(|comment| comment.id == comment_id)
            .ok_or_else(|| DomainError::NotFound("Comment does not exist".to_string()))?;

        if !self.comments[index].is_authored_by(caller) {
            return Err(DomainError::Unauthorized("User not authorized".to_string()));
        }

        Ok(self.comments.remove(index))
    }
}

/// Remove and return the first element matching `predicate`.
fn remove_first<T>(items: &mut Vec<T>, predicate: impl FnMut(&T) -> bool) -> Option<T> {
    let index = items.iter().position(predicate)?;
    Some(items.remove(index))
}
