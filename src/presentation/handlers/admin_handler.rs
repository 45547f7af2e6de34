use crate::application::ports::notifier::{Notification, Notifier};
use crate::application::services::AdminService;
use crate::domain::value_objects::{PostId, UserId};
use crate::presentation::dto::post_dto::PostResponse;
use crate::presentation::dto::user_dto::{AdminDashboardResponse, UserResponse};
use crate::shared::error::AppError;
use std::sync::Arc;

pub const POST_DELETED: &str = "Post erfolgreich gelöscht!";
pub const USER_DELETED: &str = "Benutzer erfolgreich gelöscht!";
pub const ROLE_CHANGED: &str = "Benutzerrolle geändert!";

/// Dashboard with one search box over both the post and user tables.
/// Deletions apply immediately.
pub struct AdminHandler {
    admin_service: Arc<AdminService>,
    notifier: Arc<dyn Notifier>,
    query: String,
}

impl AdminHandler {
    pub fn new(admin_service: Arc<AdminService>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            admin_service,
            notifier,
            query: String::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub async fn view(&self) -> Result<AdminDashboardResponse, AppError> {
        let posts = self.admin_service.filtered_posts(&self.query).await?;
        let users = self.admin_service.filtered_users(&self.query).await?;
        Ok(AdminDashboardResponse {
            query: self.query.clone(),
            stats: self.admin_service.dashboard_stats().await?,
            posts: posts.into_iter().map(PostResponse::from).collect(),
            users: users.into_iter().map(UserResponse::from).collect(),
        })
    }

    pub async fn delete_post(&self, id: PostId) -> Result<(), AppError> {
        self.admin_service.delete_post(id).await?;
        self.notifier.notify(Notification::success(POST_DELETED)).await;
        Ok(())
    }

    pub async fn delete_user(&self, id: UserId) -> Result<(), AppError> {
        self.admin_service.delete_user(id).await?;
        self.notifier.notify(Notification::success(USER_DELETED)).await;
        Ok(())
    }

    pub async fn toggle_user_role(&self, id: UserId) -> Result<UserResponse, AppError> {
        let user = self.admin_service.toggle_user_role(id).await?;
        self.notifier.notify(Notification::success(ROLE_CHANGED)).await;
        Ok(user.into())
    }
}
