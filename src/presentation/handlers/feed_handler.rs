use super::{POST_BOOKMARKED, POST_LIKED};
use crate::application::ports::notifier::{Notification, Notifier};
use crate::application::ports::share::ShareOutcome;
use crate::application::services::{FeedService, PostService};
use crate::domain::ContentFilter;
use crate::domain::value_objects::PostId;
use crate::presentation::dto::post_dto::{FeedResponse, PostResponse};
use crate::shared::error::AppError;
use std::sync::Arc;

/// Home feed: search box, tag chips and per-card reactions.
pub struct FeedHandler {
    feed_service: Arc<FeedService>,
    post_service: Arc<PostService>,
    notifier: Arc<dyn Notifier>,
    filter: ContentFilter,
}

impl FeedHandler {
    pub fn new(
        feed_service: Arc<FeedService>,
        post_service: Arc<PostService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            feed_service,
            post_service,
            notifier,
            filter: ContentFilter::default(),
        }
    }

    pub fn filter(&self) -> &ContentFilter {
        &self.filter
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    /// Returns whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.filter.toggle_tag(tag)
    }

    pub fn clear_tags(&mut self) {
        self.filter.clear_tags();
    }

    pub async fn view(&self) -> Result<FeedResponse, AppError> {
        let posts = self.feed_service.filtered_posts(&self.filter).await?;
        Ok(FeedResponse {
            query: self.filter.query().to_string(),
            selected_tags: self.filter.selected_tags().to_vec(),
            available_tags: self.feed_service.available_tags().await?,
            posts: posts.into_iter().map(PostResponse::from).collect(),
        })
    }

    pub async fn toggle_like(&self, id: PostId) -> Result<PostResponse, AppError> {
        let post = self.post_service.toggle_like(id).await?;
        self.notifier.notify(Notification::success(POST_LIKED)).await;
        Ok(post.into())
    }

    pub async fn toggle_bookmark(&self, id: PostId) -> Result<PostResponse, AppError> {
        let post = self.post_service.toggle_bookmark(id).await?;
        self.notifier.notify(Notification::success(POST_BOOKMARKED)).await;
        Ok(post.into())
    }

    /// Shares with the card's excerpt as text.
    pub async fn share(&self, id: PostId) -> Result<ShareOutcome, AppError> {
        self.post_service.share_post(id, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::notifier::Severity;
    use crate::infrastructure::fixtures;
    use crate::infrastructure::memory::MemoryRepository;
    use crate::infrastructure::{NativeShareTarget, TracingNotifier};
    use crate::shared::config::AppConfig;

    fn handler() -> (FeedHandler, Arc<TracingNotifier>) {
        let config = AppConfig::default();
        let repo = Arc::new(MemoryRepository::new().with_posts(fixtures::feed_posts()));
        let notifier = Arc::new(TracingNotifier::default());
        let post_service = PostService::new(
            repo.clone(),
            repo.clone(),
            Arc::new(NativeShareTarget::new()),
            config.comments,
            config.share,
        );
        let handler = FeedHandler::new(
            Arc::new(FeedService::new(repo)),
            Arc::new(post_service),
            notifier.clone(),
        );
        (handler, notifier)
    }

    #[tokio::test]
    async fn search_and_tags_narrow_the_view() {
        let (mut handler, _) = handler();
        assert_eq!(handler.view().await.unwrap().posts.len(), 3);

        handler.set_search("hiit");
        let view = handler.view().await.unwrap();
        assert_eq!(view.posts.len(), 1);
        assert_eq!(view.query, "hiit");

        handler.set_search("");
        assert!(handler.toggle_tag("Planung"));
        let view = handler.view().await.unwrap();
        assert_eq!(view.posts.len(), 1);
        assert_eq!(view.selected_tags, vec!["Planung".to_string()]);

        assert!(!handler.toggle_tag("Planung"));
        assert_eq!(handler.view().await.unwrap().posts.len(), 3);
    }

    #[tokio::test]
    async fn unlike_of_liked_post_toasts() {
        let (handler, notifier) = handler();
        let post = handler.toggle_like(PostId::new(2)).await.unwrap();
        assert!(!post.liked);
        assert_eq!(post.likes, 30);

        let toast = notifier.last().await.unwrap();
        assert_eq!(toast.message, POST_LIKED);
        assert_eq!(toast.severity, Severity::Success);
    }

    #[tokio::test]
    async fn reactions_survive_refiltering() {
        let (mut handler, _) = handler();
        handler.toggle_bookmark(PostId::new(1)).await.unwrap();
        handler.set_search("superfoods");
        let view = handler.view().await.unwrap();
        assert!(view.posts[0].bookmarked);
    }
}
