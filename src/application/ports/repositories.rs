use crate::domain::entities::{Comment, Post, Profile, User};
use crate::domain::value_objects::PostId;
use crate::domain::{PostCommand, UserCommand};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Posts held by one view. Mutations go through [`PostCommand`] so a real
/// backend only has to implement this trait.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<Post>, AppError>;
    async fn get_post(&self, id: PostId) -> Result<Option<Post>, AppError>;
    /// Applies the command and returns the affected post, or `None` when it was deleted.
    async fn apply_post(&self, command: PostCommand) -> Result<Option<Post>, AppError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author: String,
    pub author_avatar: Option<String>,
    pub content: String,
    pub posted_label: String,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, AppError>;
    /// Appends to the end of the post's thread, assigning the next local id.
    async fn append_comment(
        &self,
        post_id: PostId,
        comment: NewComment,
    ) -> Result<Comment, AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, AppError>;
    async fn apply_user(&self, command: UserCommand) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_profile(&self) -> Result<Profile, AppError>;
    async fn save_profile(&self, profile: &Profile) -> Result<(), AppError>;
}
