//! GraphQL schema and resolvers
//!
//! This module contains the async-graphql schema including:
//! - Query and mutation resolvers for customers
//! - Type definitions for customers and their associated records
//! - DataLoaders that batch associated record resolution

pub mod loaders;
pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_schema, DemoSchema, SchemaBuilder};
