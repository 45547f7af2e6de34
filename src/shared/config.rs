use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub share: ShareConfig,
    pub comments: CommentConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthConfig {
    /// Artificial round-trip applied to login and registration.
    pub simulated_latency_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShareConfig {
    /// Whether the platform exposes a native share sheet.
    pub native_share_available: bool,
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentConfig {
    pub current_user_label: String,
    pub current_user_avatar: String,
    pub just_now_label: String,
    pub max_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

const DEFAULT_CURRENT_USER_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=40&h=40&fit=crop&crop=face";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth: AuthConfig {
                simulated_latency_ms: 1000,
            },
            share: ShareConfig {
                native_share_available: false,
                base_url: "http://localhost:8080".to_string(),
            },
            comments: CommentConfig {
                current_user_label: "Du".to_string(),
                current_user_avatar: DEFAULT_CURRENT_USER_AVATAR.to_string(),
                just_now_label: "gerade eben".to_string(),
                max_length: 2000,
            },
            logging: LoggingConfig {
                filter: "fitblog=debug,info".to_string(),
                json: false,
            },
        }
    }
}

impl AuthConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("FITBLOG_AUTH_LATENCY_MS") {
            if let Some(value) = parse_u64(&v) {
                cfg.auth.simulated_latency_ms = value;
            }
        }
        if let Ok(v) = std::env::var("FITBLOG_NATIVE_SHARE") {
            cfg.share.native_share_available = parse_bool(&v, cfg.share.native_share_available);
        }
        if let Ok(v) = std::env::var("FITBLOG_SHARE_BASE_URL") {
            let trimmed = v.trim().trim_end_matches('/');
            if !trimmed.is_empty() {
                cfg.share.base_url = trimmed.to_string();
            }
        }
        if let Ok(v) = std::env::var("FITBLOG_CURRENT_USER_LABEL") {
            if !v.trim().is_empty() {
                cfg.comments.current_user_label = v.trim().to_string();
            }
        }
        if let Ok(v) = std::env::var("FITBLOG_COMMENT_MAX_LENGTH") {
            if let Some(value) = parse_usize(&v) {
                cfg.comments.max_length = value;
            }
        }
        if let Ok(v) = std::env::var("FITBLOG_LOG_FILTER") {
            if !v.trim().is_empty() {
                cfg.logging.filter = v.trim().to_string();
            }
        }
        if let Ok(v) = std::env::var("FITBLOG_JSON_LOGS") {
            cfg.logging.json = parse_bool(&v, cfg.logging.json);
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.comments.max_length == 0 {
            return Err("Comment max_length must be greater than 0".to_string());
        }
        if self.comments.current_user_label.trim().is_empty() {
            return Err("Comment current_user_label must not be empty".to_string());
        }
        if self.share.base_url.trim().is_empty() {
            return Err("Share base_url must not be empty".to_string());
        }
        Ok(())
    }
}

fn parse_bool(s: &str, default: bool) -> bool {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

fn parse_usize(value: &str) -> Option<usize> {
    parse_u64(value).and_then(|n| usize::try_from(n).ok())
}
