use crate::shared::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareOutcome {
    /// Handed to the platform share sheet.
    Shared,
    /// No share sheet; the link was copied instead.
    Copied,
}

/// Share capability. Exactly one implementation is chosen at startup.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    fn name(&self) -> &'static str;
    async fn share(&self, payload: &SharePayload) -> Result<ShareOutcome, AppError>;
}
