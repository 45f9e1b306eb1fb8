//! OpenAPI documentation.

use utoipa::OpenApi;

use common::MessageResponse;
use domain::{CreatePost, CreateUser, Post, UpdatePost, UpdateUser, User, UserPost};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
        crate::handlers::user_handler::list_user_posts,
        crate::handlers::user_handler::create_user_post,
        crate::handlers::post_handler::list_posts,
        crate::handlers::post_handler::get_post,
        crate::handlers::post_handler::update_post,
        crate::handlers::post_handler::delete_post,
    ),
    components(
        schemas(
            User,
            CreateUser,
            UpdateUser,
            UserPost,
            Post,
            CreatePost,
            UpdatePost,
            MessageResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management and authored posts"),
        (name = "Posts", description = "Post management"),
    )
)]
pub struct ApiDoc;
