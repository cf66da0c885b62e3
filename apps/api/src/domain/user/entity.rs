use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Public part of a user account, as shown next to the user's comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub avatar: Option<String>,
}
