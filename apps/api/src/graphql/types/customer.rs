//! Customer GraphQL type
//!
//! This module defines the GraphQL type for customers with its associated
//! record resolvers.

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::error::ApiError;
use crate::graphql::loaders::{AccountLoader, ProfileLoader};
use crate::models::Customer as DbCustomer;

use super::associated::{Account, Profile};

/// Customer exposed via GraphQL
pub struct Customer {
    inner: DbCustomer,
}

impl Customer {
    pub fn new(customer: DbCustomer) -> Self {
        Self { inner: customer }
    }
}

impl From<DbCustomer> for Customer {
    fn from(customer: DbCustomer) -> Self {
        Self::new(customer)
    }
}

#[Object]
impl Customer {
    /// Unique customer identifier
    async fn id(&self) -> i32 {
        self.inner.id
    }

    /// Customer name
    async fn name(&self) -> &str {
        &self.inner.name
    }

    // Associated record resolvers

    /// Account derived for this customer (batched across sibling customers)
    async fn account(&self, ctx: &Context<'_>) -> Result<Account> {
        let loader = ctx.data::<DataLoader<AccountLoader>>()?;
        let account = loader
            .load_one(self.inner.clone())
            .await?
            .ok_or_else(|| missing_record("account", self.inner.id))?;

        Ok(Account::from(account))
    }

    /// Profile derived for this customer (batched across sibling customers)
    async fn profile(&self, ctx: &Context<'_>) -> Result<Profile> {
        let loader = ctx.data::<DataLoader<ProfileLoader>>()?;
        let profile = loader
            .load_one(self.inner.clone())
            .await?
            .ok_or_else(|| missing_record("profile", self.inner.id))?;

        Ok(Profile::from(profile))
    }
}

/// A loader returned no entry for a requested customer
fn missing_record(kind: &str, customer_id: i32) -> async_graphql::Error {
    ApiError::Internal(format!("no {} resolved for customer {}", kind, customer_id)).extend()
}
