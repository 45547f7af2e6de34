pub mod comment_id;
pub mod post_id;
pub mod user_id;

pub use comment_id::CommentId;
pub use post_id::PostId;
pub use user_id::UserId;
