use super::MemoryRepository;
use crate::application::ports::repositories::UserRepository;
use crate::domain::entities::User;
use crate::domain::{UserCommand, apply_user_command};
use crate::shared::error::AppError;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl UserRepository for MemoryRepository {
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.clone())
    }

    async fn apply_user(&self, command: UserCommand) -> Result<Option<User>, AppError> {
        let mut users = self.users.write().await;
        let applied = apply_user_command(&users, &command)?;
        *users = applied.items;
        debug!(command = command.name(), user_id = %command.user_id(), "user command applied");
        Ok(applied.updated)
    }
}
