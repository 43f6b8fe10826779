//! Customer queries for the GraphQL API
//!
//! - customers: List every stored customer
//! - customerById: Look up a single customer

use async_graphql::{Context, Object, Result};

use crate::graphql::types::Customer;
use crate::repositories::CustomerRepository;

/// Customer-related queries
#[derive(Default)]
pub struct CustomerQuery;

#[Object]
impl CustomerQuery {
    /// All stored customers
    async fn customers(&self, ctx: &Context<'_>) -> Result<Vec<Customer>> {
        let repo = ctx.data::<CustomerRepository>()?;
        let customers = repo.list().await;

        Ok(customers.into_iter().map(Customer::from).collect())
    }

    /// Get a customer by ID
    ///
    /// Returns null when no customer has this id.
    async fn customer_by_id(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Customer>> {
        let repo = ctx.data::<CustomerRepository>()?;
        Ok(repo.find_by_id(id).await.map(Customer::from))
    }
}
