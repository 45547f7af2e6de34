//! Optimistic list rewrites. Each command produces a new list and leaves the
//! input untouched; only the addressed item differs in the result.

use crate::domain::entities::{Post, User};
use crate::domain::value_objects::{PostId, UserId};
use crate::shared::{AppError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "post_id", rename_all = "snake_case")]
pub enum PostCommand {
    ToggleLike(PostId),
    ToggleBookmark(PostId),
    IncrementComments(PostId),
    Delete(PostId),
}

impl PostCommand {
    pub fn post_id(&self) -> PostId {
        match self {
            PostCommand::ToggleLike(id)
            | PostCommand::ToggleBookmark(id)
            | PostCommand::IncrementComments(id)
            | PostCommand::Delete(id) => *id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PostCommand::ToggleLike(_) => "toggle_like",
            PostCommand::ToggleBookmark(_) => "toggle_bookmark",
            PostCommand::IncrementComments(_) => "increment_comments",
            PostCommand::Delete(_) => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "user_id", rename_all = "snake_case")]
pub enum UserCommand {
    ToggleRole(UserId),
    Delete(UserId),
}

impl UserCommand {
    pub fn user_id(&self) -> UserId {
        match self {
            UserCommand::ToggleRole(id) | UserCommand::Delete(id) => *id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UserCommand::ToggleRole(_) => "toggle_role",
            UserCommand::Delete(_) => "delete",
        }
    }
}

/// Result of applying a command: the rewritten list plus the affected item
/// as it looks afterwards (`None` for deletions).
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<T> {
    pub items: Vec<T>,
    pub updated: Option<T>,
}

pub fn apply_post_command(posts: &[Post], command: &PostCommand) -> Result<Applied<Post>> {
    let id = command.post_id();
    if !posts.iter().any(|post| post.id == id) {
        return Err(AppError::not_found("post", id));
    }

    if let PostCommand::Delete(_) = command {
        let items = posts.iter().filter(|post| post.id != id).cloned().collect();
        return Ok(Applied {
            items,
            updated: None,
        });
    }

    let mut updated = None;
    let items = posts
        .iter()
        .map(|post| {
            if post.id != id {
                return post.clone();
            }
            let mut next = post.clone();
            match command {
                PostCommand::ToggleLike(_) => next.toggle_like(),
                PostCommand::ToggleBookmark(_) => next.toggle_bookmark(),
                PostCommand::IncrementComments(_) => next.increment_comments(),
                PostCommand::Delete(_) => unreachable!("deletion handled above"),
            }
            updated = Some(next.clone());
            next
        })
        .collect();

    Ok(Applied { items, updated })
}

pub fn apply_user_command(users: &[User], command: &UserCommand) -> Result<Applied<User>> {
    let id = command.user_id();
    if !users.iter().any(|user| user.id == id) {
        return Err(AppError::not_found("user", id));
    }

    match command {
        UserCommand::Delete(_) => Ok(Applied {
            items: users.iter().filter(|user| user.id != id).cloned().collect(),
            updated: None,
        }),
        UserCommand::ToggleRole(_) => {
            let mut updated = None;
            let items = users
                .iter()
                .map(|user| {
                    if user.id != id {
                        return user.clone();
                    }
                    let mut next = user.clone();
                    next.toggle_role();
                    updated = Some(next.clone());
                    next
                })
                .collect();
            Ok(Applied { items, updated })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UserRole;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 12).unwrap()
    }

    fn posts() -> Vec<Post> {
        vec![
            Post::new(PostId::new(1), "Superfoods", "Sarah Meyer", date())
                .with_engagement(24, 8, 0),
            Post::new(PostId::new(2), "HIIT", "Max Kraft", date())
                .with_engagement(31, 12, 0)
                .with_reactions(true, true),
        ]
    }

    fn users() -> Vec<User> {
        vec![
            User::new(UserId::new(1), "Sarah Meyer", "sarah@beispiel.com", date()),
            User::new(UserId::new(3), "Admin User", "admin@fitblog.com", date())
                .with_role(UserRole::Admin),
        ]
    }

    #[test]
    fn like_touches_only_the_target() {
        let before = posts();
        let applied =
            apply_post_command(&before, &PostCommand::ToggleLike(PostId::new(1))).unwrap();

        assert_eq!(applied.items[0].likes, 25);
        assert!(applied.items[0].liked);
        assert_eq!(applied.items[1], before[1]);
        assert_eq!(applied.updated.as_ref(), Some(&applied.items[0]));
        // input is untouched
        assert_eq!(before[0].likes, 24);
    }

    #[test]
    fn like_twice_round_trips() {
        let start = posts();
        let cmd = PostCommand::ToggleLike(PostId::new(2));
        let once = apply_post_command(&start, &cmd).unwrap();
        assert_eq!(once.items[1].likes, 30);
        assert!(!once.items[1].liked);
        let twice = apply_post_command(&once.items, &cmd).unwrap();
        assert_eq!(twice.items, start);
    }

    #[test]
    fn bookmark_has_no_counter() {
        let applied =
            apply_post_command(&posts(), &PostCommand::ToggleBookmark(PostId::new(2))).unwrap();
        let post = applied.updated.unwrap();
        assert!(!post.bookmarked);
        assert_eq!(post.likes, 31);
    }

    #[test]
    fn comment_counter_keeps_reactions() {
        let start = posts();
        let cmd = PostCommand::IncrementComments(PostId::new(2));
        let post = apply_post_command(&start, &cmd).unwrap().updated.unwrap();
        assert_eq!(post.comment_count, 13);
        assert!(post.liked && post.bookmarked);
        assert_eq!(post.likes, 31);
    }

    #[test]
    fn delete_removes_and_keeps_order() {
        let applied = apply_post_command(&posts(), &PostCommand::Delete(PostId::new(1))).unwrap();
        assert_eq!(applied.items.len(), 1);
        assert_eq!(applied.items[0].id, PostId::new(2));
        assert!(applied.updated.is_none());
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let err = apply_post_command(&posts(), &PostCommand::Delete(PostId::new(99))).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        let err =
            apply_user_command(&users(), &UserCommand::ToggleRole(UserId::new(42))).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn role_toggle_twice_restores_role() {
        let start = users();
        let cmd = UserCommand::ToggleRole(UserId::new(3));
        let once = apply_user_command(&start, &cmd).unwrap();
        assert_eq!(once.updated.as_ref().unwrap().role, UserRole::User);
        let twice = apply_user_command(&once.items, &cmd).unwrap();
        assert_eq!(twice.items, start);
    }

    #[test]
    fn user_delete_is_permanent() {
        let once = apply_user_command(&users(), &UserCommand::Delete(UserId::new(1))).unwrap();
        assert_eq!(once.items.len(), 1);
        assert!(apply_user_command(&once.items, &UserCommand::Delete(UserId::new(1))).is_err());
    }

    #[test]
    fn commands_serialize_with_a_type_tag() {
        let json = serde_json::to_value(PostCommand::ToggleLike(PostId::new(4))).unwrap();
        assert_eq!(json, serde_json::json!({"type": "toggle_like", "post_id": 4}));
    }
}
