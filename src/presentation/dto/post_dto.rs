use super::Validate;
use crate::domain::entities::{Comment, Post};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: u64,
    pub title: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub author: String,
    pub author_avatar: Option<String>,
    pub published_on: String,
    pub tags: Vec<String>,
    pub likes: u32,
    pub comments: u32,
    pub views: u32,
    pub liked: bool,
    pub bookmarked: bool,
    pub status: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.value(),
            status: post.status.as_str().to_string(),
            published_on: post.published_on.format("%Y-%m-%d").to_string(),
            title: post.title,
            excerpt: post.excerpt,
            image_url: post.image_url,
            author: post.author,
            author_avatar: post.author_avatar,
            tags: post.tags,
            likes: post.likes,
            comments: post.comment_count,
            views: post.views,
            liked: post.liked,
            bookmarked: post.bookmarked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: u64,
    pub author: String,
    pub author_avatar: Option<String>,
    pub content: String,
    pub posted: String,
    pub likes: u32,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.value(),
            author: comment.author,
            author_avatar: comment.author_avatar,
            content: comment.content,
            posted: comment.posted_label,
            likes: comment.likes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    pub query: String,
    pub selected_tags: Vec<String>,
    pub available_tags: Vec<String>,
    pub posts: Vec<PostResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    pub post: PostResponse,
    /// Full body markup.
    pub content: String,
    pub comments: Vec<CommentResponse>,
    pub comment_draft: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitCommentRequest {
    pub post_id: u64,
    pub content: String,
}

impl Validate for SubmitCommentRequest {
    fn validate(&self) -> Result<(), String> {
        if self.post_id == 0 {
            return Err("Post-ID fehlt.".to_string());
        }
        Ok(())
    }
}
