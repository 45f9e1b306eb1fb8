//! Post handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::Value;

use common::{AppError, AppResult, MessageResponse, OptionExt, ResultExt};
use domain::{
    Post, UpdatePost, POST_DELETED, POST_GET_FAILED, POST_GONE, POST_LIST_FAILED,
    POST_NOT_FOUND, POST_REMOVE_FAILED, POST_UPDATE_FAILED,
};

use crate::extractors::{ValidPostId, ValidatedBody};
use crate::state::AppState;

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts))
        .route("/:id", get(get_post).put(update_post).delete(delete_post))
}

/// List posts
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "Posts",
    responses(
        (status = 200, description = "All posts", body = Vec<Post>),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<Post>>> {
    let posts = state.posts.list().await.context(POST_LIST_FAILED)?;
    Ok(Json(posts))
}

/// Get post by ID
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post", body = Post),
        (status = 400, description = "Invalid post ID", body = MessageResponse),
        (status = 404, description = "Post vanished after validation", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn get_post(
    ValidPostId(id): ValidPostId,
    State(state): State<AppState>,
) -> AppResult<Json<Post>> {
    let post = state
        .posts
        .find_by_id(id)
        .await
        .context(POST_GET_FAILED)?
        .ok_or_not_found(POST_NOT_FOUND)?;

    Ok(Json(post))
}

/// Delete post
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post deleted", body = MessageResponse),
        (status = 400, description = "Invalid post ID", body = MessageResponse),
        (status = 404, description = "Post vanished before removal", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn delete_post(
    ValidPostId(id): ValidPostId,
    State(state): State<AppState>,
) -> AppResult<Json<MessageResponse>> {
    let removed = state.posts.remove(id).await.context(POST_REMOVE_FAILED)?;

    if removed > 0 {
        Ok(Json(MessageResponse::new(POST_DELETED)))
    } else {
        Err(AppError::not_found(POST_GONE))
    }
}

/// Update post; responds with the submitted body
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(("id" = i32, Path, description = "Post ID")),
    request_body = UpdatePost,
    responses(
        (status = 200, description = "The submitted body, unchanged", body = UpdatePost),
        (status = 400, description = "Invalid post ID, missing post data or text", body = MessageResponse),
        (status = 404, description = "Post vanished before the update", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn update_post(
    ValidPostId(id): ValidPostId,
    State(state): State<AppState>,
    ValidatedBody { payload, raw }: ValidatedBody<UpdatePost>,
) -> AppResult<Json<Value>> {
    state
        .posts
        .update(id, payload)
        .await
        .context(POST_UPDATE_FAILED)?
        .ok_or_not_found(POST_GONE)?;

    Ok(Json(raw))
}
