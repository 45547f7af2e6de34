use crate::shared::{AppError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub location: String,
    /// Display label such as "Januar 2024"; not editable.
    pub joined_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Email,
    Bio,
    Location,
}

impl Profile {
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Bio => self.bio = value,
            ProfileField::Location => self.location = value,
        }
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Bio => &self.bio,
            ProfileField::Location => &self.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEditState {
    Viewing,
    Editing { draft: Profile },
}

impl ProfileEditState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileEditState::Viewing => "viewing",
            ProfileEditState::Editing { .. } => "editing",
        }
    }
}

/// Draft/committed pair behind the profile page.
///
/// Viewing -> Editing (draft = committed) -> Save (committed = draft) | Cancel (draft dropped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEditor {
    committed: Profile,
    state: ProfileEditState,
}

impl ProfileEditor {
    pub fn new(committed: Profile) -> Self {
        Self {
            committed,
            state: ProfileEditState::Viewing,
        }
    }

    pub fn committed(&self) -> &Profile {
        &self.committed
    }

    pub fn state(&self) -> &ProfileEditState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, ProfileEditState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&Profile> {
        match &self.state {
            ProfileEditState::Editing { draft } => Some(draft),
            ProfileEditState::Viewing => None,
        }
    }

    /// Re-entering while already editing keeps the pending draft.
    pub fn begin_edit(&mut self) {
        if !self.is_editing() {
            self.state = ProfileEditState::Editing {
                draft: self.committed.clone(),
            };
        }
    }

    pub fn edit_field(&mut self, field: ProfileField, value: impl Into<String>) -> Result<()> {
        match &mut self.state {
            ProfileEditState::Editing { draft } => {
                draft.set_field(field, value);
                Ok(())
            }
            ProfileEditState::Viewing => Err(AppError::InvalidState(
                "profile is not in edit mode".to_string(),
            )),
        }
    }

    pub fn save(&mut self) -> Result<&Profile> {
        match std::mem::replace(&mut self.state, ProfileEditState::Viewing) {
            ProfileEditState::Editing { draft } => {
                self.committed = draft;
                Ok(&self.committed)
            }
            ProfileEditState::Viewing => Err(AppError::InvalidState(
                "nothing to save outside edit mode".to_string(),
            )),
        }
    }

    pub fn cancel(&mut self) -> Result<&Profile> {
        match std::mem::replace(&mut self.state, ProfileEditState::Viewing) {
            ProfileEditState::Editing { .. } => Ok(&self.committed),
            ProfileEditState::Viewing => Err(AppError::InvalidState(
                "nothing to cancel outside edit mode".to_string(),
            )),
        }
    }
}
