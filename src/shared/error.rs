use super::validation::ValidationFailureKind;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Validation error ({kind}): {message}")]
    Validation {
        kind: ValidationFailureKind,
        message: String,
    },
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(kind: ValidationFailureKind, message: impl Into<String>) -> Self {
        AppError::Validation {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(what: &str, id: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("{what} {id}"))
    }

    /// Stable machine-readable code, used by DTOs and logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::InvalidState(_) => "INVALID_STATE",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::SerializationError(_) => "SERIALIZATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Text suitable for a toast. Validation messages are already user facing.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation { message, .. } => message.clone(),
            AppError::InvalidInput(message) => message.clone(),
            AppError::NotFound(_) => "Eintrag nicht gefunden.".to_string(),
            _ => "Ein unerwarteter Fehler ist aufgetreten.".to_string(),
        }
    }

    pub fn validation_kind(&self) -> Option<ValidationFailureKind> {
        match self {
            AppError::Validation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_surface_their_message() {
        let err = AppError::validation(
            ValidationFailureKind::PasswordMismatch,
            "Passwörter stimmen nicht überein!",
        );
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.user_message(), "Passwörter stimmen nicht überein!");
        assert_eq!(
            err.validation_kind(),
            Some(ValidationFailureKind::PasswordMismatch)
        );
    }

    #[test]
    fn internal_errors_are_not_leaked_to_users() {
        let err = AppError::Internal("lock poisoned".to_string());
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert!(!err.user_message().contains("lock"));
        assert!(err.to_string().contains("lock poisoned"));
    }
}
