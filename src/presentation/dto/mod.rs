pub mod auth_dto;
pub mod post_dto;
pub mod profile_dto;
pub mod user_dto;

use crate::shared::AppError;
use serde::{Deserialize, Serialize};

/// Envelope printed by the CLI for every command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub error_code: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            error_code: None,
        }
    }

    pub fn from_app_error(error: AppError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.user_message()),
            error_code: Some(error.code().to_string()),
        }
    }

    pub fn from_result(result: crate::shared::Result<T>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::from_app_error(err),
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Loose shape check matching a browser `type="email"` field. Blank values
/// pass here; presence is decided by the service.
pub(crate) fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Ok(());
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err("Bitte gib eine gültige E-Mail-Adresse ein.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(validate_email("").is_ok());
        assert!(validate_email("sarah@beispiel.com").is_ok());
        assert!(validate_email("sarah").is_err());
        assert!(validate_email("@beispiel.com").is_err());
    }

    #[test]
    fn error_envelope_uses_user_message() {
        let response: ApiResponse<()> =
            ApiResponse::from_result(Err(AppError::InvalidState("not editing".into())));
        assert!(!response.success);
        assert_eq!(response.error_code.as_deref(), Some("INVALID_STATE"));
        assert_eq!(
            response.error.as_deref(),
            Some("Ein unerwarteter Fehler ist aufgetreten.")
        );
    }
}
