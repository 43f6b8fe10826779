//! Health check HTTP route handlers
//!
//! Provides endpoints for checking the health of the API:
//! - `GET /health` - Simple liveness check (returns 200 OK)
//! - `GET /health/ready` - Readiness check (reports the customer store)
//! - `GET /health/live` - Kubernetes-style liveness check

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};

use crate::repositories::CustomerRepository;

/// Shared application state for health check handlers
#[derive(Clone)]
pub struct HealthState {
    /// Customer store reported by the readiness check
    pub repository: CustomerRepository,
}

impl HealthState {
    pub fn new(repository: CustomerRepository) -> Self {
        Self { repository }
    }
}

/// Create health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(simple_health))
        .route("/live", get(liveness))
        .route("/ready", get(readiness))
        .with_state(state)
}

/// Simple health check - always returns OK if the server is running
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness check for Kubernetes
///
/// Returns 200 if the server process is running and can handle requests.
async fn liveness() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check
///
/// The store lives in memory, so the service is ready as soon as it can
/// take the read lock. The response carries the current customer count.
async fn readiness(State(state): State<HealthState>) -> impl IntoResponse {
    let customers = state.repository.count().await;

    Json(serde_json::json!({
        "status": "ready",
        "customers": customers,
    }))
}
