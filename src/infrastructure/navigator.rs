use crate::application::ports::navigator::{Navigator, Route};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Records every navigation; the last entry is the visible view.
#[derive(Clone)]
pub struct HistoryNavigator {
    history: Arc<RwLock<Vec<Route>>>,
}

impl HistoryNavigator {
    pub fn new(start: Route) -> Self {
        Self {
            history: Arc::new(RwLock::new(vec![start])),
        }
    }

    pub async fn current(&self) -> Route {
        self.history
            .read()
            .await
            .last()
            .copied()
            .unwrap_or(Route::Home)
    }

    pub async fn history(&self) -> Vec<Route> {
        self.history.read().await.clone()
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

#[async_trait]
impl Navigator for HistoryNavigator {
    async fn navigate(&self, route: Route) {
        info!(path = %route, "navigating");
        self.history.write().await.push(route);
    }
}
