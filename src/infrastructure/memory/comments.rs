use super::MemoryRepository;
use crate::application::ports::repositories::{CommentRepository, NewComment};
use crate::domain::entities::{Comment, next_comment_id};
use crate::domain::value_objects::PostId;
use crate::shared::error::AppError;
use async_trait::async_trait;

#[async_trait]
impl CommentRepository for MemoryRepository {
    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, AppError> {
        let comments = self.comments.read().await;
        Ok(comments.get(&post_id).cloned().unwrap_or_default())
    }

    async fn append_comment(
        &self,
        post_id: PostId,
        comment: NewComment,
    ) -> Result<Comment, AppError> {
        let mut comments = self.comments.write().await;
        let thread = comments.entry(post_id).or_default();

        let mut created = Comment::new(
            next_comment_id(thread),
            comment.author,
            comment.content,
            comment.posted_label,
        );
        created.author_avatar = comment.author_avatar;

        thread.push(created.clone());
        Ok(created)
    }
}
