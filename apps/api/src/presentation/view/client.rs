use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    application::aquariums::dto::AddCommentRequest,
    domain::aquarium::{comment::Comment, entity::Aquarium},
    presentation::http::middleware::auth::AUTH_HEADER,
};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },
}

/// The slice of the aquarium API the detail page talks to.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AquariumApi: Send + Sync {
    async fn get_aquarium(&self, id: Uuid) -> Result<Aquarium, ClientError>;
    async fn add_comment(
        &self,
        id: Uuid,
        request: AddCommentRequest,
    ) -> Result<Vec<Comment>, ClientError>;
    async fn delete_comment(
        &self,
        id: Uuid,
        comment_id: Uuid,
    ) -> Result<Vec<Comment>, ClientError>;
}

/// [`AquariumApi`] over HTTP, sending the session token in `x-auth-token`.
#[derive(Clone)]
pub struct HttpAquariumClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpAquariumClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header(AUTH_HEADER, token),
            None => builder,
        }
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl AquariumApi for HttpAquariumClient {
    async fn get_aquarium(&self, id: Uuid) -> Result<Aquarium, ClientError> {
        let response = self
            .authorized(self.http.get(self.url(&format!("/aquariums/{}", id))))
            .send()
            .await?;
        Self::read(response).await
    }

    async fn add_comment(
        &self,
        id: Uuid,
        request: AddCommentRequest,
    ) -> Result<Vec<Comment>, ClientError> {
        let response = self
            .authorized(
                self.http
                    .post(self.url(&format!("/aquariums/comment/{}", id)))
                    .json(&request),
            )
            .send()
            .await?;
        Self::read(response).await
    }

    async fn delete_comment(
        &self,
        id: Uuid,
        comment_id: Uuid,
    ) -> Result<Vec<Comment>, ClientError> {
        let response = self
            .authorized(
                self.http
                    .delete(self.url(&format!("/aquariums/comment/{}/{}", id, comment_id))),
            )
            .send()
            .await?;
        Self::read(response).await
    }
}
