//! Route configuration.

use axum::{middleware, routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{home, post_routes, user_routes};
use crate::middleware::{log_requests, with_security_headers};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
///
/// Every request, matched or not, passes the request logger and leaves with
/// the security headers.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        // Landing page
        .route("/", get(home))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Resources
        .nest("/api/users", user_routes())
        .nest("/api/posts", post_routes())
        .layer(middleware::from_fn_with_state(state.clone(), log_requests));

    with_security_headers(router).with_state(state)
}
