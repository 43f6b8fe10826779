use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graphql_demo_api::config::Config;
use graphql_demo_api::routes::app_router;
use graphql_demo_api::{build_schema, AssociatedRecordService, CustomerRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Initialize tracing (RUST_LOG, then LOG_LEVEL)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.common.log_level)
                .unwrap_or_else(|_| "graphql_demo_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let repository = CustomerRepository::new();
    let schema = build_schema(
        repository.clone(),
        AssociatedRecordService::new(),
        config.batch().clone(),
    );

    // Print the SDL and exit, for clients that generate code from it
    if std::env::args().any(|arg| arg == "--print-schema") {
        println!("{}", schema.sdl());
        return Ok(());
    }

    tracing::info!(
        environment = %config.environment(),
        batch_delay_ms = config.batch().delay_ms,
        batch_max_size = config.batch().max_batch_size,
        "Starting customer GraphQL server"
    );

    let app = app_router(&config, schema, repository);

    let addr = config.server().socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    if config.graphiql_enabled {
        tracing::info!("GraphiQL available at http://{}/graphiql", addr);
    }

    axum::serve(listener, app).await?;

    Ok(())
}
