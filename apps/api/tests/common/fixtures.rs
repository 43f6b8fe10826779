//! Test fixtures for API integration tests
//!
//! Provides prebuilt schemas and application routers backed by a fresh
//! in-memory store.

#![allow(dead_code)]

use axum::Router;
use graphql_demo_api::config::Config;
use graphql_demo_api::routes::app_router;
use graphql_demo_api::{build_schema, AssociatedRecordService, CustomerRepository, DemoSchema};
use graphql_demo_shared_config::BatchConfig;

/// Schema plus a handle on the store it reads from
pub struct TestSchema {
    pub schema: DemoSchema,
    pub repository: CustomerRepository,
}

impl TestSchema {
    /// Schema over an empty store
    pub fn new() -> Self {
        Self::with_batch(BatchConfig::default())
    }

    /// Schema over an empty store with custom loader batching
    pub fn with_batch(batch: BatchConfig) -> Self {
        let repository = CustomerRepository::new();
        let schema = build_schema(repository.clone(), AssociatedRecordService::new(), batch);
        Self { schema, repository }
    }

    /// Schema over a store seeded with the given names, in order
    pub async fn seeded(names: &[&str]) -> Self {
        let fixture = Self::new();
        for name in names {
            fixture.repository.create(*name).await.unwrap();
        }
        fixture
    }
}

/// Full application router over a fresh store
pub fn test_app(config: &Config) -> (Router, CustomerRepository) {
    let repository = CustomerRepository::new();
    let schema = build_schema(
        repository.clone(),
        AssociatedRecordService::new(),
        config.batch().clone(),
    );
    (app_router(config, schema, repository.clone()), repository)
}
