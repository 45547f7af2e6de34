use super::{Validate, validate_email};
use crate::application::services::{Credentials, Registration};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), String> {
        validate_email(&self.email)
    }
}

impl From<LoginRequest> for Credentials {
    fn from(request: LoginRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), String> {
        validate_email(&self.email)
    }
}

impl From<RegisterRequest> for Registration {
    fn from(request: RegisterRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password: request.password,
            confirm_password: request.confirm_password,
            accept_terms: request.accept_terms,
        }
    }
}

/// Form state besides the inputs, shared by the login and register pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthFormResponse {
    pub email: String,
    pub is_loading: bool,
    pub show_password: bool,
    pub show_confirm_password: bool,
    pub remember_me: bool,
}
