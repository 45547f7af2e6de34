use crate::shared::config::AuthConfig;
use crate::shared::{AppError, ValidationFailureKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

pub const FIELDS_REQUIRED: &str = "Bitte fülle alle Felder aus.";
pub const PASSWORD_MISMATCH: &str = "Passwörter stimmen nicht überein!";
pub const TERMS_NOT_ACCEPTED: &str = "Bitte akzeptiere die Nutzungsbedingungen!";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Simulated sign-in and sign-up. There is no backend: credentials are only
/// checked for presence and nothing is remembered afterwards.
pub struct AuthService {
    latency: Duration,
}

impl AuthService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            latency: config.latency(),
        }
    }

    /// Waits out the round trip first, then checks the fields.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), AppError> {
        tokio::time::sleep(self.latency).await;

        if credentials.email.is_empty() || credentials.password.is_empty() {
            warn!("login rejected: missing fields");
            return Err(AppError::validation(
                ValidationFailureKind::RequiredFieldMissing,
                FIELDS_REQUIRED,
            ));
        }

        info!(email = %credentials.email, "login succeeded");
        Ok(())
    }

    /// Checks the form synchronously, then waits out the round trip.
    pub async fn register(&self, registration: &Registration) -> Result<(), AppError> {
        Self::validate_registration(registration).inspect_err(|err| {
            warn!(kind = ?err.validation_kind(), "registration rejected");
        })?;

        tokio::time::sleep(self.latency).await;
        info!(email = %registration.email, "registration succeeded");
        Ok(())
    }

    fn validate_registration(registration: &Registration) -> Result<(), AppError> {
        if registration.password != registration.confirm_password {
            return Err(AppError::validation(
                ValidationFailureKind::PasswordMismatch,
                PASSWORD_MISMATCH,
            ));
        }
        if !registration.accept_terms {
            return Err(AppError::validation(
                ValidationFailureKind::TermsNotAccepted,
                TERMS_NOT_ACCEPTED,
            ));
        }
        let required = [
            &registration.first_name,
            &registration.last_name,
            &registration.email,
            &registration.password,
        ];
        if required.iter().any(|value| is_blank(value)) {
            return Err(AppError::validation(
                ValidationFailureKind::RequiredFieldMissing,
                FIELDS_REQUIRED,
            ));
        }
        Ok(())
    }
}
