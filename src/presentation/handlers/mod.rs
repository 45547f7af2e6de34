pub mod admin_handler;
pub mod auth_handler;
pub mod feed_handler;
pub mod post_handler;
pub mod profile_handler;

pub use admin_handler::AdminHandler;
pub use auth_handler::{LoginHandler, RegisterHandler};
pub use feed_handler::FeedHandler;
pub use post_handler::PostHandler;
pub use profile_handler::ProfileHandler;

use super::dto::Validate;
use crate::application::ports::notifier::{Notification, Notifier};
use crate::shared::error::AppError;
use tracing::warn;

pub const POST_LIKED: &str = "Post geliked!";
pub const POST_BOOKMARKED: &str = "Post gespeichert!";

/// Runs DTO validation, surfacing failures as `InvalidInput`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), AppError> {
    input.validate().map_err(AppError::InvalidInput)
}

/// Shows an error toast for failures the user can act on. Other errors are
/// only logged and left to the caller.
pub(crate) async fn report_failure(notifier: &dyn Notifier, error: &AppError) {
    match error {
        AppError::Validation { .. } | AppError::InvalidInput(_) => {
            notifier.notify(Notification::error(error.user_message())).await;
        }
        _ => warn!(code = error.code(), error = %error, "action failed"),
    }
}
