use crate::domain::value_objects::CommentId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub author_avatar: Option<String>,
    pub content: String,
    /// Relative time label as shown next to the comment ("vor 2 Tagen").
    pub posted_label: String,
    pub likes: u32,
}

impl Comment {
    pub fn new(
        id: CommentId,
        author: impl Into<String>,
        content: impl Into<String>,
        posted_label: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            author_avatar: None,
            content: content.into(),
            posted_label: posted_label.into(),
            likes: 0,
        }
    }

    pub fn with_author_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.author_avatar = Some(avatar.into());
        self
    }

    pub fn with_likes(mut self, likes: u32) -> Self {
        self.likes = likes;
        self
    }
}

/// Id for the next comment appended to `comments`.
pub fn next_comment_id(comments: &[Comment]) -> CommentId {
    comments
        .iter()
        .map(|comment| comment.id)
        .max()
        .map(|id| id.next())
        .unwrap_or(CommentId::new(1))
}
