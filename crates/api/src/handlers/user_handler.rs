//! User handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;

use common::{AppError, AppResult, MessageResponse, OptionExt, ResultExt};
use domain::{
    CreatePost, CreateUser, Post, UpdateUser, User, UserFilter, UserPost, USER_ADD_FAILED,
    USER_DELETED, USER_GET_FAILED, USER_GONE, USER_LIST_FAILED, USER_NOT_FOUND,
    USER_POSTS_FAILED, USER_POST_ADD_FAILED, USER_REMOVE_FAILED, USER_UPDATE_FAILED,
};

use crate::extractors::{FilterQuery, ObjectBody, ValidUserId, ValidatedBody};
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .route("/:id/posts", get(list_user_posts).post(create_user_post))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing user data or name", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedBody { payload, .. }: ValidatedBody<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.users.insert(payload).await.context(USER_ADD_FAILED)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Create a post written by the user in the path
#[utoipa::path(
    post,
    path = "/api/users/{id}/posts",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = CreatePost,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 400, description = "Invalid user ID, missing post data or text", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn create_user_post(
    ValidUserId(user_id): ValidUserId,
    State(state): State<AppState>,
    ValidatedBody { payload, .. }: ValidatedBody<CreatePost>,
) -> AppResult<(StatusCode, Json<Post>)> {
    let post = state
        .posts
        .insert(payload.by(user_id))
        .await
        .context(USER_POST_ADD_FAILED)?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// List users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(UserFilter),
    responses(
        (status = 200, description = "All matching users", body = Vec<User>),
        (status = 400, description = "Unreadable query string", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    FilterQuery(filter): FilterQuery<UserFilter>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.users.list(filter).await.context(USER_LIST_FAILED)?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Invalid user ID", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn get_user(
    ValidUserId(id): ValidUserId,
    State(state): State<AppState>,
) -> AppResult<Json<User>> {
    let user = state
        .users
        .find_by_id(id)
        .await
        .context(USER_GET_FAILED)?
        .ok_or_not_found(USER_NOT_FOUND)?;

    Ok(Json(user))
}

/// List the user's posts
#[utoipa::path(
    get,
    path = "/api/users/{id}/posts",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Posts by the user", body = Vec<UserPost>),
        (status = 400, description = "Invalid user ID", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn list_user_posts(
    ValidUserId(id): ValidUserId,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserPost>>> {
    let posts = state.users.user_posts(id).await.context(USER_POSTS_FAILED)?;
    Ok(Json(posts))
}

/// Delete user (and, through the store, their posts)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Invalid user ID", body = MessageResponse),
        (status = 404, description = "User vanished before removal", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn delete_user(
    ValidUserId(id): ValidUserId,
    State(state): State<AppState>,
) -> AppResult<Json<MessageResponse>> {
    let removed = state.users.remove(id).await.context(USER_REMOVE_FAILED)?;

    if removed > 0 {
        Ok(Json(MessageResponse::new(USER_DELETED)))
    } else {
        Err(AppError::not_found(USER_GONE))
    }
}

/// Update user; responds with the submitted body
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "The submitted body, unchanged", body = UpdateUser),
        (status = 400, description = "Invalid user ID or malformed body", body = MessageResponse),
        (status = 404, description = "User vanished before the update", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn update_user(
    ValidUserId(id): ValidUserId,
    State(state): State<AppState>,
    ObjectBody { payload, raw }: ObjectBody<UpdateUser>,
) -> AppResult<Json<Value>> {
    state
        .users
        .update(id, payload)
        .await
        .context(USER_UPDATE_FAILED)?
        .ok_or_not_found(USER_GONE)?;

    Ok(Json(raw))
}
