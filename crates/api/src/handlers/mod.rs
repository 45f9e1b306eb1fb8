//! HTTP request handlers.

pub mod home_handler;
pub mod post_handler;
pub mod user_handler;

pub use home_handler::home;
pub use post_handler::post_routes;
pub use user_handler::user_routes;
