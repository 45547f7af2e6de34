mod clipboard;
mod native;

pub use clipboard::{ClipboardShareTarget, LINK_COPIED};
pub use native::NativeShareTarget;

use crate::application::ports::notifier::Notifier;
use crate::application::ports::share::ShareTarget;
use crate::shared::config::ShareConfig;
use std::sync::Arc;
use tracing::info;

/// Capability detection, done once when the app state is built.
pub fn select_share_target(
    config: &ShareConfig,
    notifier: Arc<dyn Notifier>,
) -> Arc<dyn ShareTarget> {
    let target: Arc<dyn ShareTarget> = if config.native_share_available {
        Arc::new(NativeShareTarget::new())
    } else {
        Arc::new(ClipboardShareTarget::new(notifier))
    };
    info!(share_target = target.name(), "share target selected");
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::notifier::{Notification, Severity};
    use crate::application::ports::share::{ShareOutcome, SharePayload};
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Notifier {}

        #[async_trait]
        impl Notifier for Notifier {
            async fn notify(&self, notification: Notification);
        }
    }

    fn payload() -> SharePayload {
        SharePayload {
            title: "HIIT Workout für Anfänger".to_string(),
            text: "Effektives Training".to_string(),
            url: "http://localhost:8080/post/2".to_string(),
        }
    }

    fn config(native: bool) -> ShareConfig {
        ShareConfig {
            native_share_available: native,
            base_url: "http://localhost:8080".to_string(),
        }
    }

    #[tokio::test]
    async fn native_share_does_not_toast() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();

        let target = select_share_target(&config(true), Arc::new(notifier));
        assert_eq!(target.name(), "native");
        assert_eq!(target.share(&payload()).await.unwrap(), ShareOutcome::Shared);
    }

    #[tokio::test]
    async fn fallback_copies_and_toasts() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.message == LINK_COPIED && n.severity == Severity::Success)
            .times(1)
            .return_const(());

        let target = select_share_target(&config(false), Arc::new(notifier));
        assert_eq!(target.name(), "clipboard");
        assert_eq!(target.share(&payload()).await.unwrap(), ShareOutcome::Copied);
    }

    #[tokio::test]
    async fn clipboard_holds_the_url() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().return_const(());
        let target = ClipboardShareTarget::new(Arc::new(notifier));
        target.share(&payload()).await.unwrap();
        assert_eq!(target.contents().await.as_deref(), Some("http://localhost:8080/post/2"));
    }
}
