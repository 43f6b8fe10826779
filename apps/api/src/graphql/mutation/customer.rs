//! Customer mutations for the GraphQL API
//!
//! - addCustomer: Store a new customer
//! - updateCustomer: Rename an existing customer
//! - deleteCustomer: Remove a customer and return it

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::error::ApiError;
use crate::graphql::types::Customer;
use crate::repositories::CustomerRepository;

/// Convert API errors to GraphQL errors carrying an error code
fn to_graphql_error(error: ApiError) -> async_graphql::Error {
    error.log();
    error.extend()
}

/// Customer mutations
#[derive(Default)]
pub struct CustomerMutation;

#[Object]
impl CustomerMutation {
    /// Store a new customer and return it with its assigned id
    async fn add_customer(&self, ctx: &Context<'_>, name: String) -> Result<Customer> {
        let repo = ctx.data::<CustomerRepository>()?;
        let customer = repo.create(name).await.map_err(to_graphql_error)?;

        tracing::info!(customer_id = customer.id, "Customer added");

        Ok(Customer::from(customer))
    }

    /// Replace the name of an existing customer
    ///
    /// Fails with NOT_FOUND when the id is unknown.
    async fn update_customer(&self, ctx: &Context<'_>, id: i32, name: String) -> Result<Customer> {
        let repo = ctx.data::<CustomerRepository>()?;
        let customer = repo.update(id, name).await.map_err(to_graphql_error)?;

        tracing::info!(customer_id = id, "Customer updated");

        Ok(Customer::from(customer))
    }

    /// Delete a customer, returning the removed record
    ///
    /// Fails with NOT_FOUND when the id is unknown.
    async fn delete_customer(&self, ctx: &Context<'_>, id: i32) -> Result<Customer> {
        let repo = ctx.data::<CustomerRepository>()?;
        let customer = repo.delete(id).await.map_err(to_graphql_error)?;

        tracing::info!(customer_id = id, "Customer deleted");

        Ok(Customer::from(customer))
    }
}
