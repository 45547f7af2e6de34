use crate::application::ports::notifier::{Notification, Notifier};
use crate::application::ports::share::{ShareOutcome, SharePayload, ShareTarget};
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

pub const LINK_COPIED: &str = "Link kopiert!";

/// Fallback when no share sheet exists: copy the link and say so.
pub struct ClipboardShareTarget {
    clipboard: Arc<RwLock<Option<String>>>,
    notifier: Arc<dyn Notifier>,
}

impl ClipboardShareTarget {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            clipboard: Arc::new(RwLock::new(None)),
            notifier,
        }
    }

    pub async fn contents(&self) -> Option<String> {
        self.clipboard.read().await.clone()
    }
}

#[async_trait]
impl ShareTarget for ClipboardShareTarget {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    async fn share(&self, payload: &SharePayload) -> Result<ShareOutcome, AppError> {
        *self.clipboard.write().await = Some(payload.url.clone());
        info!(url = %payload.url, "share sheet unavailable, link copied");
        self.notifier.notify(Notification::success(LINK_COPIED)).await;
        Ok(ShareOutcome::Copied)
    }
}
