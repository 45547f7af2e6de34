//! Hard-coded sample data each view is mounted with.

use crate::domain::entities::{Comment, Post, PostStatus, Profile, User, UserRole};
use crate::domain::value_objects::{CommentId, PostId, UserId};
use chrono::NaiveDate;

const AVATAR_SARAH: &str =
    "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=40&h=40&fit=crop&crop=face";
const AVATAR_MAX: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=40&h=40&fit=crop&crop=face";
const AVATAR_LISA: &str =
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=40&h=40&fit=crop&crop=face";
const AVATAR_GENERIC: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=40&h=40&fit=crop&crop=face";

const IMAGE_SUPERFOODS: &str = "https://images.unsplash.com/photo-1490818387583-1baba5e638af";
const IMAGE_HIIT: &str = "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b";
const IMAGE_MEAL_PREP: &str = "https://images.unsplash.com/photo-1512621776951-a57141f2eefd";

const TITLE_SUPERFOODS: &str = "5 Superfoods für mehr Energie im Alltag";
const TITLE_HIIT: &str = "HIIT Workout für Anfänger - 15 Minuten Power";
const EXCERPT_SUPERFOODS: &str =
    "Entdecke natürliche Energiequellen, die deinen Tag revolutionieren werden...";

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn post(id: u64, title: &str, author: &str, published_on: NaiveDate) -> Post {
    Post::new(PostId::new(id), title, author, published_on)
}

fn card_image(base: &str) -> String {
    format!("{base}?w=400&h=300&fit=crop")
}

/// Posts shown on the home feed.
pub fn feed_posts() -> Vec<Post> {
    vec![
        post(1, TITLE_SUPERFOODS, "Sarah Meyer", day(2024, 1, 15))
            .with_excerpt(EXCERPT_SUPERFOODS)
            .with_image(card_image(IMAGE_SUPERFOODS))
            .with_author_avatar(AVATAR_SARAH)
            .with_tags(["Ernährung", "Superfoods", "Energie"])
            .with_engagement(24, 8, 0),
        post(2, TITLE_HIIT, "Max Kraft", day(2024, 1, 12))
            .with_excerpt("Effektives Training auch mit wenig Zeit - so geht's richtig...")
            .with_image(card_image(IMAGE_HIIT))
            .with_author_avatar(AVATAR_MAX)
            .with_tags(["Fitness", "HIIT", "Anfänger"])
            .with_engagement(31, 12, 0)
            .with_reactions(true, true),
        post(3, "Meal Prep: 7 Tage gesunde Ernährung vorbereiten", "Lisa Grün", day(2024, 1, 10))
            .with_excerpt("So planst du eine ganze Woche voller nährstoffreicher Mahlzeiten...")
            .with_image(card_image(IMAGE_MEAL_PREP))
            .with_author_avatar(AVATAR_LISA)
            .with_tags(["Meal Prep", "Ernährung", "Planung"])
            .with_engagement(45, 19, 0),
    ]
}

const SUPERFOODS_BODY: &str = "\
<p>In unserem hektischen Alltag ist es oft schwierig, die nötige Energie aufzubringen. Hier sind 5 Superfoods, die dir dabei helfen können:</p>
<h3>1. Quinoa - Das Kraftpaket</h3>
<p>Quinoa ist reich an Protein und komplexen Kohlenhydraten, die für langanhaltende Energie sorgen.</p>
<h3>2. Blaubeeren - Antioxidantien-Bomben</h3>
<p>Diese kleinen Früchte sind voller Antioxidantien und Vitamine.</p>
<h3>3. Spinat - Der grüne Energielieferant</h3>
<p>Reich an Eisen und Folsäure, hilft Spinat dabei, Müdigkeit zu bekämpfen.</p>
<h3>4. Nüsse - Gesunde Fette</h3>
<p>Mandeln, Walnüsse und Co. liefern gesunde Fette und Protein.</p>
<h3>5. Grüner Tee - Sanfter Wachmacher</h3>
<p>Eine gesunde Alternative zu Kaffee, die Energie liefert ohne den Crash danach.</p>
<p><strong>Fazit:</strong> Integriere diese Superfoods schrittweise in deine Ernährung und spüre den Unterschied!</p>";

/// The fully written-out post, with a body and a comment thread.
pub fn detail_post() -> Post {
    post(1, TITLE_SUPERFOODS, "Sarah Meyer", day(2024, 1, 15))
        .with_excerpt(EXCERPT_SUPERFOODS)
        .with_content(SUPERFOODS_BODY)
        .with_image(format!("{IMAGE_SUPERFOODS}?w=800&h=400&fit=crop"))
        .with_author_avatar(AVATAR_SARAH)
        .with_tags(["Ernährung", "Superfoods", "Energie"])
        .with_engagement(24, 8, 0)
}

/// Every post the feed links to, as the detail page shows it. Posts without
/// a written-out body show their excerpt as a single paragraph.
pub fn detail_posts() -> Vec<Post> {
    let full = detail_post();
    feed_posts()
        .into_iter()
        .map(|post| {
            if post.id == full.id {
                return full.clone();
            }
            let body = format!("<p>{}</p>", post.excerpt);
            post.with_content(body)
        })
        .collect()
}

pub fn detail_comments() -> Vec<Comment> {
    vec![
        Comment::new(
            CommentId::new(1),
            "Max Müller",
            "Super hilfreicher Artikel! Ich hab schon angefangen, mehr Quinoa zu essen.",
            "vor 2 Tagen",
        )
        .with_author_avatar(AVATAR_GENERIC)
        .with_likes(3),
        Comment::new(
            CommentId::new(2),
            "Lisa Schmidt",
            "Grüner Tee ist wirklich ein Game-changer! Danke für die Tipps 🙏",
            "vor 1 Tag",
        )
        .with_author_avatar(AVATAR_LISA)
        .with_likes(5),
    ]
}

pub fn admin_posts() -> Vec<Post> {
    vec![
        post(1, TITLE_SUPERFOODS, "Sarah Meyer", day(2024, 1, 15)).with_engagement(24, 8, 245),
        post(2, TITLE_HIIT, "Max Kraft", day(2024, 1, 12)).with_engagement(31, 12, 189),
        post(3, "Meal Prep Guide für die ganze Woche", "Lisa Grün", day(2024, 1, 10))
            .with_status(PostStatus::Draft),
    ]
}

pub fn admin_users() -> Vec<User> {
    vec![
        User::new(UserId::new(1), "Sarah Meyer", "sarah@beispiel.com", day(2024, 1, 15))
            .with_avatar(AVATAR_SARAH)
            .with_post_count(3),
        User::new(UserId::new(2), "Max Kraft", "max@beispiel.com", day(2024, 1, 12))
            .with_avatar(AVATAR_MAX)
            .with_post_count(5),
        User::new(UserId::new(3), "Admin User", "admin@fitblog.com", day(2024, 1, 1))
            .with_avatar(AVATAR_GENERIC)
            .with_post_count(12)
            .with_role(UserRole::Admin),
    ]
}

pub fn profile() -> Profile {
    Profile {
        name: "Sarah Mueller".to_string(),
        email: "sarah@beispiel.com".to_string(),
        bio: "Fitness-Enthusiastin und Ernährungsberaterin. \
              Teile gerne meine Tipps für ein gesundes Leben! 🌱💪"
            .to_string(),
        location: "München, Deutschland".to_string(),
        joined_label: "Januar 2024".to_string(),
    }
}

/// Posts written by the profile owner.
pub fn profile_posts() -> Vec<Post> {
    vec![
        post(1, "Meine Fitness-Reise: Von 0 auf 100", "Sarah Mueller", day(2024, 1, 20))
            .with_excerpt("Wie ich in 6 Monaten mein Leben verändert habe...")
            .with_tags(["Motivation", "Fitness"])
            .with_engagement(15, 5, 0),
        post(2, "5 einfache Rezepte für den Alltag", "Sarah Mueller", day(2024, 1, 18))
            .with_excerpt("Gesund kochen muss nicht kompliziert sein...")
            .with_tags(["Rezepte", "Ernährung"])
            .with_engagement(23, 8, 0),
    ]
}

/// Posts the profile owner has liked.
pub fn liked_posts() -> Vec<Post> {
    vec![
        post(3, "HIIT Workout für Anfänger", "Max Kraft", day(2024, 1, 15))
            .with_tags(["Fitness", "HIIT"])
            .with_reactions(true, false),
        post(4, "Superfoods im Überblick", "Lisa Grün", day(2024, 1, 12))
            .with_tags(["Ernährung", "Superfoods"])
            .with_reactions(true, false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_ids(posts: &[Post]) {
        let ids: HashSet<_> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn fixture_ids_are_unique_per_view() {
        assert_unique_ids(&feed_posts());
        assert_unique_ids(&admin_posts());
        let mut profile_view = profile_posts();
        profile_view.extend(liked_posts());
        assert_unique_ids(&profile_view);

        let users: HashSet<_> = admin_users().iter().map(|u| u.id).collect();
        assert_eq!(users.len(), 3);
    }

    #[test]
    fn feed_likes_are_consistent_with_flags() {
        let hiit = &feed_posts()[1];
        assert!(hiit.liked && hiit.bookmarked);
        assert_eq!(hiit.likes, 31);
    }

    #[test]
    fn every_feed_post_has_a_detail_page() {
        let details = detail_posts();
        let feed_ids: Vec<_> = feed_posts().iter().map(|p| p.id).collect();
        let detail_ids: Vec<_> = details.iter().map(|p| p.id).collect();
        assert_eq!(detail_ids, feed_ids);
        assert!(details.iter().all(|p| !p.content.is_empty()));
        assert_eq!(details[0], detail_post());
    }

    #[test]
    fn admin_has_one_draft() {
        let drafts = admin_posts().iter().filter(|p| !p.is_published()).count();
        assert_eq!(drafts, 1);
    }
}
