//! Domain layer - Core entities and request validation rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Both the store and the HTTP layer speak in these types.

pub mod constants;
pub mod error;
pub mod post;
pub mod resource;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use post::{CreatePost, NewPost, Post, UpdatePost};
pub use resource::{is_truthy, Resource};
pub use user::{CreateUser, UpdateUser, User, UserFilter, UserPost};
