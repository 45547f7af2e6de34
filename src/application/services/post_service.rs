use crate::application::ports::navigator::Route;
use crate::application::ports::repositories::{CommentRepository, NewComment, PostRepository};
use crate::application::ports::share::{ShareOutcome, SharePayload, ShareTarget};
use crate::domain::PostCommand;
use crate::domain::entities::{Comment, Post};
use crate::domain::value_objects::PostId;
use crate::shared::config::{CommentConfig, ShareConfig};
use crate::shared::{AppError, ValidationFailureKind};
use std::sync::Arc;
use tracing::{info, warn};

pub struct PostService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    share_target: Arc<dyn ShareTarget>,
    comment_config: CommentConfig,
    share_config: ShareConfig,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        share_target: Arc<dyn ShareTarget>,
        comment_config: CommentConfig,
        share_config: ShareConfig,
    ) -> Self {
        Self {
            posts,
            comments,
            share_target,
            comment_config,
            share_config,
        }
    }

    pub async fn get_post(&self, id: PostId) -> Result<Post, AppError> {
        self.posts
            .get_post(id)
            .await?
            .ok_or_else(|| AppError::not_found("post", id))
    }

    pub async fn list_comments(&self, id: PostId) -> Result<Vec<Comment>, AppError> {
        self.comments.list_comments(id).await
    }

    pub async fn toggle_like(&self, id: PostId) -> Result<Post, AppError> {
        let post = self.apply(PostCommand::ToggleLike(id)).await?;
        info!(post_id = %id, liked = post.liked, likes = post.likes, "like toggled");
        Ok(post)
    }

    pub async fn toggle_bookmark(&self, id: PostId) -> Result<Post, AppError> {
        let post = self.apply(PostCommand::ToggleBookmark(id)).await?;
        info!(post_id = %id, bookmarked = post.bookmarked, "bookmark toggled");
        Ok(post)
    }

    async fn apply(&self, command: PostCommand) -> Result<Post, AppError> {
        self.posts
            .apply_post(command)
            .await?
            .ok_or_else(|| AppError::not_found("post", command.post_id()))
    }

    /// Shares the post's canonical link. `text` defaults to the excerpt.
    pub async fn share_post(
        &self,
        id: PostId,
        text: Option<&str>,
    ) -> Result<ShareOutcome, AppError> {
        let post = self.get_post(id).await?;
        let payload = SharePayload {
            text: text.map(str::to_string).unwrap_or_else(|| post.excerpt.clone()),
            url: format!(
                "{}{}",
                self.share_config.base_url.trim_end_matches('/'),
                Route::Post(id).path()
            ),
            title: post.title,
        };
        let outcome = self.share_target.share(&payload).await?;
        info!(post_id = %id, share_target = self.share_target.name(), ?outcome, "post shared");
        Ok(outcome)
    }

    /// Appends a comment by the current user. Whitespace-only content is a
    /// no-op and yields `None`; content is otherwise stored as typed.
    pub async fn submit_comment(
        &self,
        id: PostId,
        content: &str,
    ) -> Result<Option<Comment>, AppError> {
        if content.trim().is_empty() {
            return Ok(None);
        }
        let length = content.chars().count();
        if length > self.comment_config.max_length {
            warn!(post_id = %id, length, "comment rejected: too long");
            return Err(AppError::validation(
                ValidationFailureKind::ContentTooLarge,
                format!(
                    "Kommentar ist zu lang (maximal {} Zeichen).",
                    self.comment_config.max_length
                ),
            ));
        }

        self.get_post(id).await?;
        let comment = self
            .comments
            .append_comment(
                id,
                NewComment {
                    author: self.comment_config.current_user_label.clone(),
                    author_avatar: Some(self.comment_config.current_user_avatar.clone()),
                    content: content.to_string(),
                    posted_label: self.comment_config.just_now_label.clone(),
                },
            )
            .await?;

        self.apply(PostCommand::IncrementComments(id)).await?;
        info!(post_id = %id, comment_id = %comment.id, "comment added");
        Ok(Some(comment))
    }
}
