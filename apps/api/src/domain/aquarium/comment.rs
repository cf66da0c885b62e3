use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::domain::user::entity::UserProfile;

/// A comment embedded in an aquarium.
///
/// `name` and `avatar` are copied from the author's profile when the comment
/// is written and are not refreshed if the profile changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Comment {
    pub id: Uuid,
    /// Author of the comment
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub name: String,
    pub avatar: Option<String>,
    pub text: String,
    /// Star rating between 0 and 5
    pub rating: Option<u8>,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &UserProfile, text: String, rating: Option<u8>) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id: author.id,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            text,
            rating,
            created_at: Utc::now(),
        }
    }

    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}
