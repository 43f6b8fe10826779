//! GraphQL HTTP route handlers
//!
//! - `POST /graphql` - Execute a query or mutation
//! - `GET /graphql/playground` - GraphQL Playground IDE
//! - `GET /graphiql` - GraphiQL IDE

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig, GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    response::{Html, IntoResponse},
    routing::{get, post},
    Extension, Router,
};

use crate::graphql::DemoSchema;

/// Path the GraphQL endpoint is served on
pub const GRAPHQL_PATH: &str = "/graphql";

/// Create the GraphQL router
///
/// The IDE pages are only mounted when `ide_enabled` is set.
pub fn graphql_router(schema: DemoSchema, ide_enabled: bool) -> Router {
    let mut router = Router::new().route(GRAPHQL_PATH, post(graphql_handler));

    if ide_enabled {
        router = router
            .route("/graphql/playground", get(graphql_playground))
            .route("/graphiql", get(graphiql));
    }

    router.layer(Extension(schema))
}

/// GraphQL handler that executes queries against the schema
async fn graphql_handler(
    Extension(schema): Extension<DemoSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphQL Playground handler for development
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new(GRAPHQL_PATH)))
}

/// GraphiQL handler for development
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
