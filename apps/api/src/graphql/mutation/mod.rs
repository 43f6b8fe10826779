//! GraphQL mutations
//!
//! This module contains all mutation resolvers, organized by domain.

mod customer;

pub use customer::CustomerMutation;

use async_graphql::MergedObject;

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(CustomerMutation);
