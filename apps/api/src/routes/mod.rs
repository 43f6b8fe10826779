//! HTTP route handlers for the API
//!
//! This module contains all endpoint handlers including:
//! - GraphQL execution and IDE pages
//! - Health check and status endpoints

pub mod graphql;
pub mod health;

pub use graphql::{graphql_router, GRAPHQL_PATH};
pub use health::{health_router, HealthState};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::graphql::DemoSchema;
use crate::middleware::build_cors_layer;
use crate::repositories::CustomerRepository;

/// Build the full application router
pub fn app_router(config: &Config, schema: DemoSchema, repository: CustomerRepository) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(graphql_router(schema, config.graphiql_enabled))
        // Nested health routes: /health, /health/live, /health/ready
        .nest("/health", health_router(HealthState::new(repository)))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config))
}

async fn root() -> &'static str {
    "Customer GraphQL demo - POST queries to /graphql"
}
