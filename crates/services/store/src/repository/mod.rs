//! Repository layer for data access.

pub mod entities;
mod post_repository;
mod user_repository;

pub use post_repository::{PostRepository, PostStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use post_repository::MockPostRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
