use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Reason a form or command was rejected before any state was committed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ValidationFailureKind {
    /// A required form field was left empty.
    RequiredFieldMissing,
    /// Password and its confirmation differ.
    PasswordMismatch,
    /// The terms-of-use checkbox was not ticked.
    TermsNotAccepted,
    /// Free text exceeds the configured limit.
    ContentTooLarge,
}

impl ValidationFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationFailureKind::RequiredFieldMissing => "required_field_missing",
            ValidationFailureKind::PasswordMismatch => "password_mismatch",
            ValidationFailureKind::TermsNotAccepted => "terms_not_accepted",
            ValidationFailureKind::ContentTooLarge => "content_too_large",
        }
    }
}

impl fmt::Display for ValidationFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationFailureKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "required_field_missing" => Ok(ValidationFailureKind::RequiredFieldMissing),
            "password_mismatch" => Ok(ValidationFailureKind::PasswordMismatch),
            "terms_not_accepted" => Ok(ValidationFailureKind::TermsNotAccepted),
            "content_too_large" => Ok(ValidationFailureKind::ContentTooLarge),
            _ => Err(()),
        }
    }
}
