//! Application state for dependency injection.

use std::sync::Arc;

use common::{AppConfig, AppResult};
use domain::Resource;
use store::{PostRepository, UserRepository};

use crate::middleware::{RequestLogger, TracingRequestLogger};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub config: AppConfig,
    /// Hook invoked once per inbound request
    pub request_logger: Arc<dyn RequestLogger>,
}

impl AppState {
    /// Create new app state that logs requests through `tracing`.
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        config: AppConfig,
    ) -> Self {
        Self {
            users,
            posts,
            config,
            request_logger: Arc::new(TracingRequestLogger),
        }
    }

    /// Replace the request-log hook.
    pub fn with_request_logger(mut self, request_logger: Arc<dyn RequestLogger>) -> Self {
        self.request_logger = request_logger;
        self
    }

    /// Whether a record of the given kind exists.
    pub async fn exists(&self, resource: Resource, id: i32) -> AppResult<bool> {
        match resource {
            Resource::User => Ok(self.users.find_by_id(id).await?.is_some()),
            Resource::Post => Ok(self.posts.find_by_id(id).await?.is_some()),
        }
    }
}
