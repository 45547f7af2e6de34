#![allow(dead_code)]

use fitblog_lib::{AppConfig, AppState};

pub fn config() -> AppConfig {
    let mut config = AppConfig::default();
    config.share.native_share_available = false;
    config
}

pub fn state() -> AppState {
    AppState::new(config()).expect("default config is valid")
}

pub fn state_with(config: AppConfig) -> AppState {
    AppState::new(config).expect("config is valid")
}

pub async fn toast_messages(state: &AppState) -> Vec<String> {
    state
        .notifier
        .recent()
        .await
        .into_iter()
        .map(|n| n.message)
        .collect()
}
