use super::{POST_BOOKMARKED, POST_LIKED, report_failure, validate_input};
use crate::application::ports::notifier::{Notification, Notifier};
use crate::application::ports::share::ShareOutcome;
use crate::application::services::PostService;
use crate::domain::value_objects::PostId;
use crate::presentation::dto::post_dto::{
    CommentResponse, PostDetailResponse, PostResponse, SubmitCommentRequest,
};
use crate::shared::error::AppError;
use std::sync::Arc;

pub const COMMENT_ADDED: &str = "Kommentar hinzugefügt!";
pub const DETAIL_SHARE_TEXT: &str = "Schau dir diesen tollen Artikel an!";

/// Detail page for one post, with the comment box.
pub struct PostHandler {
    post_service: Arc<PostService>,
    notifier: Arc<dyn Notifier>,
    post_id: PostId,
    comment_draft: String,
}

impl PostHandler {
    pub fn new(
        post_service: Arc<PostService>,
        notifier: Arc<dyn Notifier>,
        post_id: PostId,
    ) -> Self {
        Self {
            post_service,
            notifier,
            post_id,
            comment_draft: String::new(),
        }
    }

    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    pub fn comment_draft(&self) -> &str {
        &self.comment_draft
    }

    pub fn set_comment_draft(&mut self, text: impl Into<String>) {
        self.comment_draft = text.into();
    }

    pub async fn view(&self) -> Result<PostDetailResponse, AppError> {
        let post = self.post_service.get_post(self.post_id).await?;
        let comments = self.post_service.list_comments(self.post_id).await?;
        Ok(PostDetailResponse {
            content: post.content.clone(),
            post: post.into(),
            comments: comments.into_iter().map(CommentResponse::from).collect(),
            comment_draft: self.comment_draft.clone(),
        })
    }

    pub async fn toggle_like(&self) -> Result<PostResponse, AppError> {
        let post = self.post_service.toggle_like(self.post_id).await?;
        self.notifier.notify(Notification::success(POST_LIKED)).await;
        Ok(post.into())
    }

    pub async fn toggle_bookmark(&self) -> Result<PostResponse, AppError> {
        let post = self.post_service.toggle_bookmark(self.post_id).await?;
        self.notifier.notify(Notification::success(POST_BOOKMARKED)).await;
        Ok(post.into())
    }

    pub async fn share(&self) -> Result<ShareOutcome, AppError> {
        self.post_service
            .share_post(self.post_id, Some(DETAIL_SHARE_TEXT))
            .await
    }

    /// Submits the current draft. A blank draft is ignored and left as is;
    /// on success the draft is cleared.
    pub async fn submit_comment(&mut self) -> Result<Option<CommentResponse>, AppError> {
        let request = SubmitCommentRequest {
            post_id: self.post_id.value(),
            content: self.comment_draft.clone(),
        };
        validate_input(&request)?;

        match self
            .post_service
            .submit_comment(self.post_id, &request.content)
            .await
        {
            Ok(Some(comment)) => {
                self.comment_draft.clear();
                self.notifier.notify(Notification::success(COMMENT_ADDED)).await;
                Ok(Some(comment.into()))
            }
            Ok(None) => Ok(None),
            Err(err) => {
                report_failure(self.notifier.as_ref(), &err).await;
                Err(err)
            }
        }
    }
}
