use crate::application::ports::repositories::{PostRepository, UserRepository};
use crate::domain::entities::{Post, User};
use crate::domain::value_objects::{PostId, UserId};
use crate::domain::{ContentFilter, PostCommand, SearchScope, UserCommand};
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Headline numbers on the dashboard, derived from the current lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_posts: usize,
    pub published_posts: usize,
    pub draft_posts: usize,
    pub total_users: usize,
    pub admin_users: usize,
    pub total_comments: u64,
    pub total_views: u64,
    pub total_likes: u64,
}

impl DashboardStats {
    pub fn from_lists(posts: &[Post], users: &[User]) -> Self {
        let published_posts = posts.iter().filter(|p| p.is_published()).count();
        Self {
            total_posts: posts.len(),
            published_posts,
            draft_posts: posts.len() - published_posts,
            total_users: users.len(),
            admin_users: users.iter().filter(|u| u.is_admin()).count(),
            total_comments: posts.iter().map(|p| u64::from(p.comment_count)).sum(),
            total_views: posts.iter().map(|p| u64::from(p.views)).sum(),
            total_likes: posts.iter().map(|p| u64::from(p.likes)).sum(),
        }
    }
}

pub struct AdminService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl AdminService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    pub async fn filtered_posts(&self, query: &str) -> Result<Vec<Post>, AppError> {
        let posts = self.posts.list_posts().await?;
        let visible = ContentFilter::new(query)
            .with_scope(SearchScope::Admin)
            .apply(&posts);
        debug!(query, visible = visible.len(), "admin post filter recomputed");
        Ok(visible)
    }

    /// Users are filtered by the search box only.
    pub async fn filtered_users(&self, query: &str) -> Result<Vec<User>, AppError> {
        let users = self.users.list_users().await?;
        let visible = ContentFilter::new(query)
            .with_scope(SearchScope::Admin)
            .apply(&users);
        debug!(query, visible = visible.len(), "admin user filter recomputed");
        Ok(visible)
    }

    pub async fn delete_post(&self, id: PostId) -> Result<(), AppError> {
        self.posts.apply_post(PostCommand::Delete(id)).await?;
        info!(post_id = %id, "post deleted");
        Ok(())
    }

    pub async fn delete_user(&self, id: UserId) -> Result<(), AppError> {
        self.users.apply_user(UserCommand::Delete(id)).await?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }

    pub async fn toggle_user_role(&self, id: UserId) -> Result<User, AppError> {
        let user = self
            .users
            .apply_user(UserCommand::ToggleRole(id))
            .await?
            .ok_or_else(|| AppError::not_found("user", id))?;
        info!(user_id = %id, role = %user.role, "user role toggled");
        Ok(user)
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        let posts = self.posts.list_posts().await?;
        let users = self.users.list_users().await?;
        Ok(DashboardStats::from_lists(&posts, &users))
    }
}
