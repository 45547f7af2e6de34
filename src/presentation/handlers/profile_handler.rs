use super::{report_failure, validate_input};
use crate::application::ports::notifier::{Notification, Notifier};
use crate::application::services::ProfileService;
use crate::domain::entities::{ProfileEditor, ProfileField};
use crate::presentation::dto::post_dto::PostResponse;
use crate::presentation::dto::profile_dto::{ProfileData, ProfileResponse, UpdateProfileRequest};
use crate::shared::error::AppError;
use std::sync::Arc;

pub const PROFILE_SAVED: &str = "Profil erfolgreich aktualisiert!";

pub struct ProfileHandler {
    profile_service: Arc<ProfileService>,
    notifier: Arc<dyn Notifier>,
    editor: ProfileEditor,
}

impl ProfileHandler {
    /// Loads the committed profile and starts in view mode.
    pub async fn mount(
        profile_service: Arc<ProfileService>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, AppError> {
        let editor = profile_service.load_editor().await?;
        Ok(Self {
            profile_service,
            notifier,
            editor,
        })
    }

    pub fn editor(&self) -> &ProfileEditor {
        &self.editor
    }

    pub fn begin_edit(&mut self) {
        self.editor.begin_edit();
    }

    pub fn edit_field(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> Result<(), AppError> {
        self.editor.edit_field(field, value)
    }

    /// Applies every present field of the request to the draft.
    pub async fn apply(&mut self, request: &UpdateProfileRequest) -> Result<(), AppError> {
        if let Err(err) = validate_input(request) {
            report_failure(self.notifier.as_ref(), &err).await;
            return Err(err);
        }
        for (field, value) in request.changes() {
            self.editor.edit_field(field, value)?;
        }
        Ok(())
    }

    pub async fn save(&mut self) -> Result<ProfileData, AppError> {
        let saved = self.profile_service.save(&mut self.editor).await?;
        self.notifier.notify(Notification::success(PROFILE_SAVED)).await;
        Ok(ProfileData::from(&saved))
    }

    pub fn cancel(&mut self) -> Result<ProfileData, AppError> {
        self.editor.cancel().map(ProfileData::from)
    }

    pub async fn view(&self) -> Result<ProfileResponse, AppError> {
        let stats = self.profile_service.stats().await?;
        let authored = self.profile_service.authored_posts().await?;
        let liked = self.profile_service.liked_posts().await?;
        Ok(ProfileResponse::new(
            &self.editor,
            stats,
            authored.into_iter().map(PostResponse::from).collect(),
            liked.into_iter().map(PostResponse::from).collect(),
        ))
    }
}
