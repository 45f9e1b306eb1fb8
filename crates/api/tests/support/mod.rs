//! Shared helpers for API integration tests.
//!
//! `MemoryStore` implements both repository traits over one set of in-memory
//! tables, so the router can be exercised without a database.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use api_lib::{create_router, AppState};
use common::{AppConfig, AppResult};
use domain::{
    CreateUser, NewPost, Post, UpdatePost, UpdateUser, User, UserFilter, UserPost,
};
use store::{PostRepository, UserRepository};

// =============================================================================
// In-memory store
// =============================================================================

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    posts: BTreeMap<i32, Post>,
    next_user_id: i32,
    next_post_id: i32,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_user(&self, name: &str) -> User {
        let mut tables = self.tables.lock().unwrap();
        tables.next_user_id += 1;
        let user = User {
            id: tables.next_user_id,
            name: name.to_string(),
        };
        tables.users.insert(user.id, user.clone());
        user
    }

    pub fn seed_post(&self, user_id: i32, text: &str) -> Post {
        let mut tables = self.tables.lock().unwrap();
        tables.next_post_id += 1;
        let post = Post {
            id: tables.next_post_id,
            text: text.to_string(),
            user_id,
        };
        tables.posts.insert(post.id, post.clone());
        post
    }

    pub fn user(&self, id: i32) -> Option<User> {
        self.tables.lock().unwrap().users.get(&id).cloned()
    }

    pub fn post(&self, id: i32) -> Option<Post> {
        self.tables.lock().unwrap().posts.get(&id).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    pub fn post_count(&self) -> usize {
        self.tables.lock().unwrap().posts.len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn list(&self, filter: UserFilter) -> AppResult<Vec<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .values()
            .filter(|u| filter.name.as_deref().map_or(true, |name| u.name == name))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.user(id))
    }

    async fn insert(&self, user: CreateUser) -> AppResult<User> {
        Ok(self.seed_user(&user.name))
    }

    async fn update(&self, id: i32, patch: UpdateUser) -> AppResult<Option<User>> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables.users.get_mut(&id).map(|user| {
            if let Some(name) = patch.name {
                user.name = name;
            }
            user.clone()
        }))
    }

    async fn remove(&self, id: i32) -> AppResult<u64> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.remove(&id).is_none() {
            return Ok(0);
        }
        tables.posts.retain(|_, post| post.user_id != id);
        Ok(1)
    }

    async fn user_posts(&self, id: i32) -> AppResult<Vec<UserPost>> {
        let tables = self.tables.lock().unwrap();
        let Some(author) = tables.users.get(&id) else {
            return Ok(Vec::new());
        };

        Ok(tables
            .posts
            .values()
            .filter(|post| post.user_id == id)
            .map(|post| UserPost {
                id: post.id,
                text: post.text.clone(),
                posted_by: author.name.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Post>> {
        Ok(self.tables.lock().unwrap().posts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Post>> {
        Ok(self.post(id))
    }

    async fn insert(&self, post: NewPost) -> AppResult<Post> {
        Ok(self.seed_post(post.user_id, &post.text))
    }

    async fn update(&self, id: i32, patch: UpdatePost) -> AppResult<Option<Post>> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables.posts.get_mut(&id).map(|post| {
            if let Some(text) = patch.text {
                post.text = text;
            }
            if let Some(user_id) = patch.user_id {
                post.user_id = user_id;
            }
            post.clone()
        }))
    }

    async fn remove(&self, id: i32) -> AppResult<u64> {
        Ok(u64::from(self.tables.lock().unwrap().posts.remove(&id).is_some()))
    }
}

// =============================================================================
// Router helpers
// =============================================================================

pub fn state_for(store: &MemoryStore) -> AppState {
    AppState::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        AppConfig::default(),
    )
}

pub fn app(store: &MemoryStore) -> Router {
    create_router(state_for(store))
}

/// Send a request with an optional raw body.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header("content-type", "application/json");
            Body::from(text.to_string())
        }
        None => Body::empty(),
    };

    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Send a request and decode the JSON response.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = body.map(|value| value.to_string());
    let response = send_raw(app, method, uri, body.as_deref()).await;
    let status = response.status();
    (status, json_body(response).await)
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn text_body(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
