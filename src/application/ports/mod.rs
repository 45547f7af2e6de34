pub mod navigator;
pub mod notifier;
pub mod repositories;
pub mod share;

pub use navigator::{Navigator, Route};
pub use notifier::{Notification, Notifier, Severity};
pub use repositories::{
    CommentRepository, NewComment, PostRepository, ProfileRepository, UserRepository,
};
pub use share::{ShareOutcome, SharePayload, ShareTarget};
