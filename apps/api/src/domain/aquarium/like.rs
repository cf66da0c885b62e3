use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Like {
    #[serde(rename = "user")]
    pub user_id: Uuid,
}

impl Like {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}
