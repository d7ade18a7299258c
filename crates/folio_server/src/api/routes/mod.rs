pub mod auth;
pub mod blog;
pub mod dashboard;
pub mod health;
pub mod photo;
pub mod post;
pub mod travel;

pub use blog::get_blog_router;
pub use dashboard::get_dashboard_router;
pub use health::get_health_router;
pub use photo::{get_photo_router, get_protected_photo_router};
pub use post::get_post_router;
pub use travel::get_travel_router;
