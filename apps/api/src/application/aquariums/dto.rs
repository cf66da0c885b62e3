use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

use crate::domain::aquarium::entity::NewAquarium;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct CreateAquariumRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

impl CreateAquariumRequest {
    /// Trim every field and drop optional fields left blank.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: non_blank(self.description),
            location: non_blank(self.location),
            photo: non_blank(self.photo),
        }
    }
}

impl From<CreateAquariumRequest> for NewAquarium {
    fn from(request: CreateAquariumRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            location: request.location,
            photo: request.photo,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct AddCommentRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
    #[serde(default)]
    #[ts(type = "number | null")]
    #[validate(range(min = 0, max = 5, message = "Rating must be between 0 and 5"))]
    pub rating: Option<i64>,
}

impl AddCommentRequest {
    pub fn normalized(self) -> Self {
        Self {
            text: self.text.trim().to_string(),
            rating: self.rating,
        }
    }

    /// The rating as stored on a comment. Out-of-range values never get here
    /// once the request has been validated.
    pub fn star_rating(&self) -> Option<u8> {
        self.rating.and_then(|r| u8::try_from(r).ok())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MessageResponse {
    pub msg: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
