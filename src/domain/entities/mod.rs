pub mod comment;
pub mod post;
pub mod profile;
pub mod user;

pub use comment::{Comment, next_comment_id};
pub use post::{Post, PostStatus};
pub use profile::{Profile, ProfileEditState, ProfileEditor, ProfileField};
pub use user::{User, UserRole};
