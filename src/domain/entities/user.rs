use crate::domain::value_objects::UserId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    /// The other of the two roles.
    pub fn toggled(self) -> Self {
        match self {
            UserRole::User => UserRole::Admin,
            UserRole::Admin => UserRole::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub joined_on: NaiveDate,
    pub post_count: u32,
    pub role: UserRole,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        joined_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            avatar_url: None,
            joined_on,
            post_count: 0,
            role: UserRole::User,
        }
    }

    pub fn with_avatar(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    pub fn with_post_count(mut self, post_count: u32) -> Self {
        self.post_count = post_count;
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn toggle_role(&mut self) {
        self.role = self.role.toggled();
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
