use super::MemoryRepository;
use crate::application::ports::repositories::ProfileRepository;
use crate::domain::entities::Profile;
use crate::shared::error::AppError;
use async_trait::async_trait;

#[async_trait]
impl ProfileRepository for MemoryRepository {
    async fn get_profile(&self) -> Result<Profile, AppError> {
        self.profile
            .read()
            .await
            .clone()
            .ok_or_else(|| AppError::NotFound("profile".to_string()))
    }

    async fn save_profile(&self, profile: &Profile) -> Result<(), AppError> {
        *self.profile.write().await = Some(profile.clone());
        Ok(())
    }
}
