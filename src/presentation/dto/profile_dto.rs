use super::{Validate, validate_email};
use super::post_dto::PostResponse;
use crate::application::services::ProfileStats;
use crate::domain::entities::{Profile, ProfileEditor, ProfileField};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub location: String,
    pub joined: String,
}

impl From<&Profile> for ProfileData {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            bio: profile.bio.clone(),
            location: profile.location.clone(),
            joined: profile.joined_label.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub state: String,
    pub profile: ProfileData,
    pub draft: Option<ProfileData>,
    pub stats: ProfileStats,
    pub authored: Vec<PostResponse>,
    pub liked: Vec<PostResponse>,
}

impl ProfileResponse {
    pub fn new(
        editor: &ProfileEditor,
        stats: ProfileStats,
        authored: Vec<PostResponse>,
        liked: Vec<PostResponse>,
    ) -> Self {
        Self {
            state: editor.state().as_str().to_string(),
            profile: editor.committed().into(),
            draft: editor.draft().map(ProfileData::from),
            stats,
            authored,
            liked,
        }
    }
}

/// Field changes applied to the draft; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

impl UpdateProfileRequest {
    pub fn changes(&self) -> Vec<(ProfileField, &str)> {
        [
            (ProfileField::Name, &self.name),
            (ProfileField::Email, &self.email),
            (ProfileField::Bio, &self.bio),
            (ProfileField::Location, &self.location),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.changes().is_empty()
    }
}

impl Validate for UpdateProfileRequest {
    fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            if name.chars().count() > 100 {
                return Err("Name ist zu lang (maximal 100 Zeichen).".to_string());
            }
        }
        if let Some(bio) = &self.bio {
            if bio.chars().count() > 500 {
                return Err("Bio ist zu lang (maximal 500 Zeichen).".to_string());
            }
        }
        match &self.email {
            Some(email) => validate_email(email),
            None => Ok(()),
        }
    }
}
