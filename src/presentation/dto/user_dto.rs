use super::post_dto::PostResponse;
use crate::application::services::DashboardStats;
use crate::domain::entities::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub joined_on: String,
    pub post_count: u32,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            role: user.role.as_str().to_string(),
            joined_on: user.joined_on.format("%Y-%m-%d").to_string(),
            name: user.name,
            email: user.email,
            avatar_url: user.avatar_url,
            post_count: user.post_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDashboardResponse {
    pub query: String,
    pub stats: DashboardStats,
    pub posts: Vec<PostResponse>,
    pub users: Vec<UserResponse>,
}
