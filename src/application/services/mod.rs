pub mod admin_service;
pub mod auth_service;
pub mod feed_service;
pub mod post_service;
pub mod profile_service;

pub use admin_service::{AdminService, DashboardStats};
pub use auth_service::{AuthService, Credentials, Registration};
pub use feed_service::FeedService;
pub use post_service::PostService;
pub use profile_service::{ProfileService, ProfileStats};
