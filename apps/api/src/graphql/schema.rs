//! GraphQL schema builder
//!
//! This module provides the schema construction for the async-graphql API.

use async_graphql::{EmptySubscription, Schema};
use graphql_demo_shared_config::BatchConfig;

use crate::repositories::CustomerRepository;
use crate::services::AssociatedRecordService;

use super::loaders::create_loaders;
use super::mutation::Mutation;
use super::query::Query;

/// The demo GraphQL schema type
pub type DemoSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema with required services
pub struct SchemaBuilder {
    repository: Option<CustomerRepository>,
    service: AssociatedRecordService,
    batch: BatchConfig,
}

impl SchemaBuilder {
    /// Create a new schema builder
    pub fn new() -> Self {
        Self {
            repository: None,
            service: AssociatedRecordService::default(),
            batch: BatchConfig::default(),
        }
    }

    /// Set the customer repository
    pub fn repository(mut self, repository: CustomerRepository) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Set the associated record service
    pub fn service(mut self, service: AssociatedRecordService) -> Self {
        self.service = service;
        self
    }

    /// Set the batching behaviour of the associated record loaders
    pub fn batch(mut self, batch: BatchConfig) -> Self {
        self.batch = batch;
        self
    }

    /// Build the schema with all configured services
    ///
    /// Without an explicit repository the schema gets a fresh, empty one.
    pub fn build(self) -> DemoSchema {
        let repository = self.repository.unwrap_or_default();
        let loaders = create_loaders(self.service, &self.batch);

        Schema::build(Query::default(), Mutation::default(), EmptySubscription)
            .data(repository)
            .data(loaders.account)
            .data(loaders.profile)
            .finish()
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new GraphQL schema with the provided services
pub fn build_schema(
    repository: CustomerRepository,
    service: AssociatedRecordService,
    batch: BatchConfig,
) -> DemoSchema {
    SchemaBuilder::new()
        .repository(repository)
        .service(service)
        .batch(batch)
        .build()
}
