use crate::application::ports::repositories::{PostRepository, ProfileRepository};
use crate::domain::entities::{Post, Profile, ProfileEditor};
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub post_count: usize,
    pub liked_count: usize,
    pub likes_received: u64,
}

pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
    authored: Arc<dyn PostRepository>,
    liked: Arc<dyn PostRepository>,
}

impl ProfileService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        authored: Arc<dyn PostRepository>,
        liked: Arc<dyn PostRepository>,
    ) -> Self {
        Self {
            profiles,
            authored,
            liked,
        }
    }

    pub async fn load_editor(&self) -> Result<ProfileEditor, AppError> {
        Ok(ProfileEditor::new(self.profiles.get_profile().await?))
    }

    /// Persists the editor's draft, then commits it. A failed write leaves
    /// the editor in edit mode with the draft intact.
    pub async fn save(&self, editor: &mut ProfileEditor) -> Result<Profile, AppError> {
        let draft = editor
            .draft()
            .cloned()
            .ok_or_else(|| AppError::InvalidState("nothing to save outside edit mode".into()))?;
        self.profiles.save_profile(&draft).await?;
        let committed = editor.save()?.clone();
        info!(name = %committed.name, "profile saved");
        Ok(committed)
    }

    pub async fn authored_posts(&self) -> Result<Vec<Post>, AppError> {
        self.authored.list_posts().await
    }

    pub async fn liked_posts(&self) -> Result<Vec<Post>, AppError> {
        self.liked.list_posts().await
    }

    pub async fn stats(&self) -> Result<ProfileStats, AppError> {
        let authored = self.authored.list_posts().await?;
        let liked = self.liked.list_posts().await?;
        Ok(ProfileStats {
            post_count: authored.len(),
            liked_count: liked.len(),
            likes_received: authored.iter().map(|p| u64::from(p.likes)).sum(),
        })
    }
}
