//! Users & Posts API Library
//!
//! This crate provides the HTTP REST API over the store: request validation
//! extractors, handlers, request logging and the router that ties them
//! together.
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -p api -- serve
//!
//! # Run migrations
//! cargo run -p api -- migrate up
//! ```

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use common::AppConfig;
use store::{Database, PostStore, UserStore};

pub use crate::routes::create_router;
pub use crate::state::AppState;

/// Connect to the database, apply migrations and serve HTTP until shutdown.
pub async fn run_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Connect to database (migrations run on connect)
    let db = Database::connect(&config.database_url).await?;
    let connection = db.get_connection();

    // Create app state
    let state = AppState::new(
        Arc::new(UserStore::new(connection.clone())),
        Arc::new(PostStore::new(connection)),
        config.clone(),
    );

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = config.server_addr().parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
