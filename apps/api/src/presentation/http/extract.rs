//! Request body extraction.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::presentation::http::errors::{AppError, FieldError};

/// JSON request body. A field of the wrong type is reported as a 400 naming
/// that field rather than axum's plain-text 422.
///
/// Every field of `T` must accept being absent (`#[serde(default)]`) so each
/// key of the body can be checked on its own.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        match serde_json::from_value::<T>(value.clone()) {
            Ok(body) => Ok(Self(body)),
            Err(err) => Err(invalid_fields::<T>(value, err)),
        }
    }
}

/// Find the keys that fail to deserialize on their own.
fn invalid_fields<T: DeserializeOwned>(value: Value, err: serde_json::Error) -> AppError {
    let Value::Object(body) = value else {
        return AppError::BadRequest("Request body must be a JSON object".to_string());
    };

    let fields: Vec<FieldError> = body
        .into_iter()
        .filter(|(key, field)| {
            let single = Map::from_iter([(key.clone(), field.clone())]);
            serde_json::from_value::<T>(Value::Object(single)).is_err()
        })
        .map(|(key, _)| FieldError {
            msg: format!("{} is invalid", key),
            field: key,
        })
        .collect();

    if fields.is_empty() {
        return AppError::BadRequest(err.to_string());
    }
    AppError::Validation(fields)
}
