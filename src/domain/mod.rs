pub mod commands;
pub mod entities;
pub mod filter;
pub mod value_objects;

pub use commands::{Applied, PostCommand, UserCommand, apply_post_command, apply_user_command};
pub use entities::{
    Comment, Post, PostStatus, Profile, ProfileEditState, ProfileEditor, ProfileField, User,
    UserRole,
};
pub use filter::{ContentFilter, SearchScope, Searchable, collect_tags};
pub use value_objects::{CommentId, PostId, UserId};
