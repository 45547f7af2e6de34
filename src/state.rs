use crate::application::ports::navigator::Route;
use crate::application::ports::notifier::Notifier;
use crate::application::ports::share::ShareTarget;
use crate::application::services::{
    AdminService, AuthService, FeedService, PostService, ProfileService,
};
use crate::domain::value_objects::PostId;
use crate::infrastructure::{
    HistoryNavigator, MemoryRepository, TracingNotifier, fixtures, select_share_target,
};
use crate::presentation::handlers::{
    AdminHandler, FeedHandler, LoginHandler, PostHandler, ProfileHandler, RegisterHandler,
};
use crate::shared::{AppConfig, AppError};
use std::sync::Arc;
use tracing::info;

/// Composition root. Collaborators shared by every view live here; each
/// `*_handler` call mounts a view with its own freshly seeded repository,
/// so state never leaks between views.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub notifier: Arc<TracingNotifier>,
    pub navigator: Arc<HistoryNavigator>,
    pub share_target: Arc<dyn ShareTarget>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        config.validate().map_err(AppError::ConfigurationError)?;

        let notifier = Arc::new(TracingNotifier::new());
        let navigator = Arc::new(HistoryNavigator::new(Route::Home));
        let share_target = select_share_target(&config.share, notifier.clone());
        let auth_service = Arc::new(AuthService::new(&config.auth));

        info!(
            share_target = share_target.name(),
            auth_latency_ms = config.auth.simulated_latency_ms,
            "app state initialized"
        );

        Ok(Self {
            config,
            notifier,
            navigator,
            share_target,
            auth_service,
        })
    }

    fn notifier(&self) -> Arc<dyn Notifier> {
        self.notifier.clone()
    }

    fn post_service(&self, repository: Arc<MemoryRepository>) -> PostService {
        PostService::new(
            repository.clone(),
            repository,
            self.share_target.clone(),
            self.config.comments.clone(),
            self.config.share.clone(),
        )
    }

    pub fn feed_handler(&self) -> FeedHandler {
        let repository = Arc::new(MemoryRepository::new().with_posts(fixtures::feed_posts()));
        FeedHandler::new(
            Arc::new(FeedService::new(repository.clone())),
            Arc::new(self.post_service(repository)),
            self.notifier(),
        )
    }

    pub fn post_handler(&self, id: PostId) -> PostHandler {
        let repository = Arc::new(
            MemoryRepository::new()
                .with_comments(fixtures::detail_post().id, fixtures::detail_comments())
                .with_posts(fixtures::detail_posts()),
        );
        PostHandler::new(Arc::new(self.post_service(repository)), self.notifier(), id)
    }

    pub fn admin_handler(&self) -> AdminHandler {
        let repository = Arc::new(
            MemoryRepository::new()
                .with_posts(fixtures::admin_posts())
                .with_users(fixtures::admin_users()),
        );
        AdminHandler::new(
            Arc::new(AdminService::new(repository.clone(), repository)),
            self.notifier(),
        )
    }

    pub async fn profile_handler(&self) -> Result<ProfileHandler, AppError> {
        let service = ProfileService::new(
            Arc::new(MemoryRepository::new().with_profile(fixtures::profile())),
            Arc::new(MemoryRepository::new().with_posts(fixtures::profile_posts())),
            Arc::new(MemoryRepository::new().with_posts(fixtures::liked_posts())),
        );
        ProfileHandler::mount(Arc::new(service), self.notifier()).await
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(
            self.auth_service.clone(),
            self.notifier(),
            self.navigator.clone(),
        )
    }

    pub fn register_handler(&self) -> RegisterHandler {
        RegisterHandler::new(
            self.auth_service.clone(),
            self.notifier(),
            self.navigator.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = AppConfig::default();
        config.comments.max_length = 0;
        let err = AppState::new(config).err().unwrap();
        assert_eq!(err.code(), "CONFIGURATION_ERROR");
    }

    #[tokio::test]
    async fn views_do_not_share_state() {
        let state = AppState::new(AppConfig::default()).unwrap();
        let feed = state.feed_handler();
        feed.toggle_like(PostId::new(1)).await.unwrap();

        let fresh = state.feed_handler().view().await.unwrap();
        assert!(!fresh.posts[0].liked);

        let detail = state.post_handler(PostId::new(1)).view().await.unwrap();
        assert!(!detail.post.liked);
    }

    #[tokio::test]
    async fn every_feed_post_opens_a_detail_view() {
        let state = AppState::new(AppConfig::default()).unwrap();
        for post in state.feed_handler().view().await.unwrap().posts {
            let detail = state.post_handler(PostId::new(post.id)).view().await.unwrap();
            assert_eq!(detail.post.title, post.title);
        }
    }
}
