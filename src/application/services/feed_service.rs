use crate::application::ports::repositories::PostRepository;
use crate::domain::entities::Post;
use crate::domain::{ContentFilter, collect_tags};
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::debug;

/// Read side of the home feed. Reactions and sharing go through
/// [`PostService`](super::PostService) on the same repository.
pub struct FeedService {
    repository: Arc<dyn PostRepository>,
}

impl FeedService {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        self.repository.list_posts().await
    }

    /// Recomputed from the current list on every call.
    pub async fn filtered_posts(&self, filter: &ContentFilter) -> Result<Vec<Post>, AppError> {
        let posts = self.repository.list_posts().await?;
        let visible = filter.apply(&posts);
        debug!(
            query = filter.query(),
            tags = filter.selected_tags().len(),
            total = posts.len(),
            visible = visible.len(),
            "feed filter recomputed"
        );
        Ok(visible)
    }

    pub async fn available_tags(&self) -> Result<Vec<String>, AppError> {
        let posts = self.repository.list_posts().await?;
        Ok(collect_tags(&posts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures;
    use crate::infrastructure::memory::MemoryRepository;

    fn service() -> FeedService {
        FeedService::new(Arc::new(
            MemoryRepository::new().with_posts(fixtures::feed_posts()),
        ))
    }

    #[tokio::test]
    async fn hiit_query_returns_only_the_hiit_post() {
        let posts = service()
            .filtered_posts(&ContentFilter::new("hiit"))
            .await
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].title.starts_with("HIIT Workout"));
    }

    #[tokio::test]
    async fn tag_selection_intersects() {
        let filter = ContentFilter::default().with_tags(["Ernährung"]);
        let ids: Vec<_> = service()
            .filtered_posts(&filter)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn query_and_tags_must_both_match() {
        let filter = ContentFilter::new("hiit").with_tags(["Meal Prep"]);
        assert!(service().filtered_posts(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn tags_are_unique_in_first_seen_order() {
        let tags = service().available_tags().await.unwrap();
        assert_eq!(tags[..3], ["Ernährung", "Superfoods", "Energie"]);
        assert_eq!(tags.iter().filter(|t| *t == "Ernährung").count(), 1);
        assert_eq!(tags.len(), 8);
    }
}
