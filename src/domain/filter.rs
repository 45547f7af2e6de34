//! Search-and-tag filtering shared by the feed and admin views.

use crate::domain::entities::{Post, User};
use serde::{Deserialize, Serialize};

/// Which view's search box is asking. Posts expose different fields per view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    #[default]
    Feed,
    Admin,
}

/// Something the search box can match against.
pub trait Searchable {
    /// Fields compared case-insensitively against the query.
    fn search_fields(&self, scope: SearchScope) -> Vec<&str>;

    /// Tags for tag filtering. `None` means the item is not taggable and a
    /// tag selection never excludes it.
    fn tags(&self) -> Option<&[String]> {
        None
    }
}

impl Searchable for Post {
    fn search_fields(&self, scope: SearchScope) -> Vec<&str> {
        match scope {
            SearchScope::Feed => vec![&self.title, &self.excerpt],
            SearchScope::Admin => vec![&self.title, &self.author],
        }
    }

    fn tags(&self) -> Option<&[String]> {
        Some(&self.tags)
    }
}

impl Searchable for User {
    fn search_fields(&self, _scope: SearchScope) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFilter {
    query: String,
    selected_tags: Vec<String>,
    scope: SearchScope,
}

impl ContentFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            selected_tags: Vec::new(),
            scope: SearchScope::Feed,
        }
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();
            if !self.selected_tags.contains(&tag) {
                self.selected_tags.push(tag);
            }
        }
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Adds the tag to the selection, or removes it if already selected.
    /// Returns whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
            false
        } else {
            self.selected_tags.push(tag.to_string());
            true
        }
    }

    pub fn clear_tags(&mut self) {
        self.selected_tags.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.selected_tags.is_empty()
    }

    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        self.matches_query(item) && self.matches_tags(item)
    }

    /// Stable filter: keeps source order and never re-sorts.
    pub fn apply<T: Searchable + Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.matches(*item))
            .cloned()
            .collect()
    }

    fn matches_query<T: Searchable>(&self, item: &T) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        item.search_fields(self.scope)
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_tags<T: Searchable>(&self, item: &T) -> bool {
        if self.selected_tags.is_empty() {
            return true;
        }
        match item.tags() {
            Some(tags) => tags.iter().any(|tag| self.selected_tags.contains(tag)),
            None => true,
        }
    }
}

/// Union of all tags in first-seen order.
pub fn collect_tags(posts: &[Post]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in posts.iter().flat_map(|post| post.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{PostId, UserId};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn post(id: u64, title: &str, author: &str) -> Post {
        Post::new(PostId::new(id), title, author, date())
    }

    fn posts() -> Vec<Post> {
        vec![
            post(1, "5 Superfoods für mehr Energie im Alltag", "Sarah Meyer")
                .with_excerpt("Entdecke natürliche Energiequellen...")
                .with_tags(["Ernährung", "Superfoods", "Energie"]),
            post(2, "HIIT Workout für Anfänger - 15 Minuten Power", "Max Kraft")
                .with_excerpt("Effektives Training auch mit wenig Zeit...")
                .with_tags(["Fitness", "HIIT", "Anfänger"]),
            post(3, "Meal Prep: 7 Tage gesunde Ernährung vorbereiten", "Lisa Grün")
                .with_excerpt("So planst du eine ganze Woche...")
                .with_tags(["Meal Prep", "Ernährung", "Planung"]),
        ]
    }

    fn ids(posts: &[Post]) -> Vec<u64> {
        posts.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn query_is_case_insensitive() {
        let result = ContentFilter::new("hiit").apply(&posts());
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        assert_eq!(ids(&ContentFilter::default().apply(&posts())), vec![1, 2, 3]);
        assert_eq!(ids(&ContentFilter::new("   ").apply(&posts())), vec![1, 2, 3]);
    }

    #[test]
    fn feed_searches_title_and_excerpt() {
        assert_eq!(ids(&ContentFilter::new("woche").apply(&posts())), vec![3]);
        assert!(ContentFilter::new("lisa").apply(&posts()).is_empty());
    }

    #[test]
    fn admin_searches_title_and_author() {
        let admin = |query: &str| ContentFilter::new(query).with_scope(SearchScope::Admin);
        assert_eq!(ids(&admin("lisa").apply(&posts())), vec![3]);
        assert!(admin("woche").apply(&posts()).is_empty());
    }

    #[test]
    fn tags_intersect_and_combine_with_query() {
        let by_tag = ContentFilter::default().with_tags(["Ernährung"]).apply(&posts());
        assert_eq!(ids(&by_tag), vec![1, 3]);

        let either = ContentFilter::default()
            .with_tags(["HIIT", "Planung"])
            .apply(&posts());
        assert_eq!(ids(&either), vec![2, 3]);

        let both = ContentFilter::new("meal")
            .with_tags(["Superfoods"])
            .apply(&posts());
        assert!(both.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let items = posts();
        for filter in [
            ContentFilter::new("für"),
            ContentFilter::new("e").with_tags(["Ernährung"]),
            ContentFilter::default(),
        ] {
            let once = filter.apply(&items);
            let twice = filter.apply(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn stricter_queries_never_return_more() {
        let items = posts();
        let queries = ["", "e", "er", "ern", "ernä", "ernäh"];
        let mut previous = usize::MAX;
        for query in queries {
            let count = ContentFilter::new(query).apply(&items).len();
            assert!(count <= previous, "{query} returned {count} > {previous}");
            previous = count;
        }
    }

    #[test]
    fn toggling_a_tag_twice_clears_it() {
        let mut filter = ContentFilter::default();
        assert!(filter.toggle_tag("HIIT"));
        assert_eq!(filter.selected_tags(), ["HIIT".to_string()]);
        assert!(!filter.toggle_tag("HIIT"));
        assert!(filter.is_empty());
    }

    #[test]
    fn users_are_matched_by_name_or_email_and_ignore_tags() {
        let users = vec![
            User::new(UserId::new(1), "Sarah Meyer", "sarah@beispiel.com", date()),
            User::new(UserId::new(3), "Admin User", "admin@fitblog.com", date()),
        ];
        let by_email = ContentFilter::new("FITBLOG").apply(&users);
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Admin User");

        let with_tags = ContentFilter::new("").with_tags(["HIIT"]).apply(&users);
        assert_eq!(with_tags.len(), 2);
    }

    #[test]
    fn collected_tags_are_unique_in_first_seen_order() {
        assert_eq!(
            collect_tags(&posts()),
            vec![
                "Ernährung", "Superfoods", "Energie", "Fitness", "HIIT", "Anfänger", "Meal Prep",
                "Planung"
            ]
        );
    }
}
