pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod state;

pub use shared::{AppConfig, AppError};
pub use state::AppState;

/// Installs the global subscriber: `EnvFilter` (`RUST_LOG` wins over
/// `filter`) plus a plain or JSON fmt layer.
pub fn init_logging(filter: &str, json: bool) -> Result<(), AppError> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .map_err(|e| AppError::ConfigurationError(format!("invalid log filter: {e}")))?;

    let fmt_layer = if json {
        fmt::layer()
            .json()
            .with_current_span(false)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Internal(format!("logging already initialized: {e}")))
}
