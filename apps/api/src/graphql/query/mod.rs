//! GraphQL queries
//!
//! This module contains all query resolvers, organized by domain.

mod customer;

pub use customer::CustomerQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(CustomerQuery);
