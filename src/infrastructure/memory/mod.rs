//! In-memory repository backing a single view. Each view mounts its own
//! instance seeded from fixtures; nothing is shared or persisted.

use crate::domain::entities::{Comment, Post, Profile, User};
use crate::domain::value_objects::PostId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

mod comments;
mod posts;
mod profile;
mod users;

#[derive(Clone, Default)]
pub struct MemoryRepository {
    posts: Arc<RwLock<Vec<Post>>>,
    comments: Arc<RwLock<HashMap<PostId, Vec<Comment>>>>,
    users: Arc<RwLock<Vec<User>>>,
    profile: Arc<RwLock<Option<Profile>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::new(RwLock::new(posts)),
            ..self
        }
    }

    pub fn with_comments(self, post_id: PostId, comments: Vec<Comment>) -> Self {
        let mut map = HashMap::new();
        map.insert(post_id, comments);
        Self {
            comments: Arc::new(RwLock::new(map)),
            ..self
        }
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            ..self
        }
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        Self {
            profile: Arc::new(RwLock::new(Some(profile))),
            ..self
        }
    }
}
