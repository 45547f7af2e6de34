use crate::domain::value_objects::PostId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    #[default]
    Published,
    Draft,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Published => "published",
            PostStatus::Draft => "draft",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author: String,
    pub author_avatar: Option<String>,
    pub published_on: NaiveDate,
    pub tags: Vec<String>,
    pub likes: u32,
    pub comment_count: u32,
    pub views: u32,
    pub liked: bool,
    pub bookmarked: bool,
    pub status: PostStatus,
}

impl Post {
    pub fn new(
        id: PostId,
        title: impl Into<String>,
        author: impl Into<String>,
        published_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            excerpt: String::new(),
            content: String::new(),
            image_url: None,
            author: author.into(),
            author_avatar: None,
            published_on,
            tags: Vec::new(),
            likes: 0,
            comment_count: 0,
            views: 0,
            liked: false,
            bookmarked: false,
            status: PostStatus::Published,
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_author_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.author_avatar = Some(avatar.into());
        self
    }

    /// Replaces the tags, dropping duplicates while keeping first-seen order.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.clear();
        for tag in tags {
            let tag = tag.into();
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self
    }

    pub fn with_engagement(mut self, likes: u32, comment_count: u32, views: u32) -> Self {
        self.likes = likes;
        self.comment_count = comment_count;
        self.views = views;
        self
    }

    pub fn with_reactions(mut self, liked: bool, bookmarked: bool) -> Self {
        self.liked = liked;
        self.bookmarked = bookmarked;
        self
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns `false` when the counter is already at its maximum.
    pub fn increment_likes(&mut self) -> bool {
        match self.likes.checked_add(1) {
            Some(likes) => {
                self.likes = likes;
                true
            }
            None => false,
        }
    }

    pub fn decrement_likes(&mut self) {
        self.likes = self.likes.saturating_sub(1);
    }

    /// Flips `liked` and moves the counter one step in the same direction.
    /// A like that cannot be counted leaves the post unchanged.
    pub fn toggle_like(&mut self) {
        if self.liked {
            self.decrement_likes();
            self.liked = false;
        } else if self.increment_likes() {
            self.liked = true;
        }
    }

    pub fn toggle_bookmark(&mut self) {
        self.bookmarked = !self.bookmarked;
    }

    pub fn increment_comments(&mut self) {
        self.comment_count = self.comment_count.saturating_add(1);
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new(
            PostId::new(1),
            "5 Superfoods für mehr Energie im Alltag",
            "Sarah Meyer",
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
        .with_engagement(24, 8, 245)
    }

    #[test]
    fn toggle_like_twice_restores_counter() {
        let mut post = sample();
        post.toggle_like();
        assert!(post.liked);
        assert_eq!(post.likes, 25);
        post.toggle_like();
        assert!(!post.liked);
        assert_eq!(post.likes, 24);
    }

    #[test]
    fn unliking_never_goes_below_zero() {
        let mut post = sample().with_engagement(0, 0, 0).with_reactions(true, false);
        post.toggle_like();
        assert!(!post.liked);
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn like_at_counter_limit_is_ignored() {
        let mut post = sample().with_engagement(u32::MAX, 0, 0);
        post.toggle_like();
        assert!(!post.liked);
        assert_eq!(post.likes, u32::MAX);
        post.toggle_like();
        assert!(!post.liked);
        assert_eq!(post.likes, u32::MAX);
    }

    #[test]
    fn tags_are_deduplicated_in_order() {
        let post = sample().with_tags(["Fitness", "HIIT", "Fitness", "Anfänger"]);
        assert_eq!(post.tags, vec!["Fitness", "HIIT", "Anfänger"]);
    }

    #[test]
    fn bookmark_toggle_leaves_likes_alone() {
        let mut post = sample();
        post.toggle_bookmark();
        assert!(post.bookmarked);
        assert_eq!(post.likes, 24);
    }
}
