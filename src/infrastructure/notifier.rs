use crate::application::ports::notifier::{Notification, Notifier, Severity};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

const DEFAULT_CAPACITY: usize = 20;

/// Emits toasts as tracing events and remembers the most recent ones so a
/// host (or a test) can render them.
#[derive(Clone)]
pub struct TracingNotifier {
    recent: Arc<RwLock<VecDeque<Notification>>>,
    capacity: usize,
}

impl TracingNotifier {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            recent: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Oldest first.
    pub async fn recent(&self) -> Vec<Notification> {
        self.recent.read().await.iter().cloned().collect()
    }

    pub async fn last(&self) -> Option<Notification> {
        self.recent.read().await.back().cloned()
    }

    pub async fn clear(&self) {
        self.recent.write().await.clear();
    }
}

impl Default for TracingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => info!(toast = %notification.message, "notification shown"),
            Severity::Error => warn!(toast = %notification.message, "notification shown"),
        }

        let mut recent = self.recent.write().await;
        if recent.len() == self.capacity {
            recent.pop_front();
        }
        recent.push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn keeps_only_the_latest_toasts() {
        let notifier = TracingNotifier::with_capacity(2);
        notifier.notify(Notification::success("eins")).await;
        notifier.notify(Notification::error("zwei")).await;
        notifier.notify(Notification::success("drei")).await;

        let messages: Vec<String> = notifier
            .recent()
            .await
            .into_iter()
            .map(|n| n.message)
            .collect();
        assert_eq!(messages, vec!["zwei", "drei"]);
        assert_eq!(notifier.last().await, Some(Notification::success("drei")));
    }
}
