use super::MemoryRepository;
use crate::application::ports::repositories::PostRepository;
use crate::domain::entities::Post;
use crate::domain::value_objects::PostId;
use crate::domain::{PostCommand, apply_post_command};
use crate::shared::error::AppError;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl PostRepository for MemoryRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        Ok(self.posts.read().await.clone())
    }

    async fn get_post(&self, id: PostId) -> Result<Option<Post>, AppError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|post| post.id == id).cloned())
    }

    async fn apply_post(&self, command: PostCommand) -> Result<Option<Post>, AppError> {
        let mut posts = self.posts.write().await;
        let applied = apply_post_command(&posts, &command)?;
        *posts = applied.items;
        debug!(command = command.name(), post_id = %command.post_id(), "post command applied");
        Ok(applied.updated)
    }
}
