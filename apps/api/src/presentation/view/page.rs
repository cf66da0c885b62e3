use serde::Serialize;
use std::sync::Arc;
use ts_rs::TS;
use uuid::Uuid;

use super::{
    client::{AquariumApi, ClientError},
    stars::star_width,
};
use crate::{
    application::aquariums::dto::AddCommentRequest,
    domain::aquarium::{comment::Comment, entity::Aquarium},
};

/// Rating shown in the page header. Aquariums carry no aggregate rating yet,
/// so the header bar uses this fixed value.
pub const HEADER_RATING: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Loaded(Aquarium),
}

/// What the page shows right now.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "status", content = "aquarium", rename_all = "snake_case")]
pub enum PageView {
    Loading,
    Ready(AquariumView),
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct AquariumView {
    pub id: Uuid,
    pub name: String,
    pub photo: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub star_width: String,
    pub compose_open: bool,
    pub comments: Vec<CommentItemView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CommentItemView {
    pub id: Uuid,
    pub author_id: Uuid,
    pub profile_link: String,
    pub name: String,
    pub avatar: Option<String>,
    pub text: String,
    pub star_width: String,
    /// `MM/DD/YYYY`
    pub posted_on: String,
    /// Only the author sees the delete action.
    pub can_delete: bool,
}

impl CommentItemView {
    fn new(comment: &Comment, viewer: Option<Uuid>) -> Self {
        Self {
            id: comment.id,
            author_id: comment.user_id,
            profile_link: format!("/profile/{}", comment.user_id),
            name: comment.name.clone(),
            avatar: comment.avatar.clone(),
            text: comment.text.clone(),
            star_width: star_width(f64::from(comment.rating.unwrap_or(0))),
            posted_on: comment.created_at.format("%m/%d/%Y").to_string(),
            can_delete: viewer == Some(comment.user_id),
        }
    }
}

/// Detail page for one aquarium.
///
/// The page starts in [`PageState::Loading`] and [`load`](Self::load) fetches
/// the aquarium once. A failed fetch is logged and leaves the page loading;
/// there is no error state to render.
pub struct AquariumPage {
    api: Arc<dyn AquariumApi>,
    aquarium_id: Uuid,
    viewer: Option<Uuid>,
    state: PageState,
    compose_open: bool,
}

impl AquariumPage {
    pub fn new(api: Arc<dyn AquariumApi>, aquarium_id: Uuid, viewer: Option<Uuid>) -> Self {
        Self {
            api,
            aquarium_id,
            viewer,
            state: PageState::Loading,
            compose_open: false,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PageState::Loading)
    }

    pub async fn load(&mut self) {
        if !self.is_loading() {
            return;
        }
        match self.api.get_aquarium(self.aquarium_id).await {
            Ok(aquarium) => self.state = PageState::Loaded(aquarium),
            Err(e) => {
                tracing::warn!(aquarium_id = %self.aquarium_id, error = %e, "failed to load aquarium");
            }
        }
    }

    pub fn toggle_compose(&mut self) {
        self.compose_open = !self.compose_open;
    }

    /// Post a comment and show the list the server returns.
    pub async fn submit_comment(&mut self, request: AddCommentRequest) -> Result<(), ClientError> {
        let comments = self.api.add_comment(self.aquarium_id, request).await?;
        self.replace_comments(comments);
        self.compose_open = false;
        Ok(())
    }

    pub async fn delete_comment(&mut self, comment_id: Uuid) -> Result<(), ClientError> {
        let comments = self
            .api
            .delete_comment(self.aquarium_id, comment_id)
            .await?;
        self.replace_comments(comments);
        Ok(())
    }

    fn replace_comments(&mut self, comments: Vec<Comment>) {
        if let PageState::Loaded(aquarium) = &mut self.state {
            aquarium.comments = comments;
        }
    }

    pub fn render(&self) -> PageView {
        match &self.state {
            PageState::Loading => PageView::Loading,
            PageState::Loaded(aquarium) => PageView::Ready(AquariumView {
                id: aquarium.id,
                name: aquarium.name.clone(),
                photo: aquarium.photo.clone(),
                location: aquarium.location.clone(),
                description: aquarium.description.clone(),
                star_width: star_width(HEADER_RATING),
                compose_open: self.compose_open,
                comments: aquarium
                    .comments
                    .iter()
                    .map(|c| CommentItemView::new(c, self.viewer))
                    .collect(),
            }),
        }
    }
}
