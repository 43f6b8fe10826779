//! Account DataLoader for batched resolution
//!
//! This loader collects the customers whose `account` field is requested
//! within one response and resolves them in a single batch call.

use async_graphql::dataloader::Loader;
use std::collections::HashMap;
use std::convert::Infallible;

use crate::models::{Account, Customer};
use crate::services::AssociatedRecordService;

/// DataLoader for batching account resolution
#[derive(Clone)]
pub struct AccountLoader {
    service: AssociatedRecordService,
}

impl AccountLoader {
    pub fn new(service: AssociatedRecordService) -> Self {
        Self { service }
    }
}

impl Loader<Customer> for AccountLoader {
    type Value = Account;
    type Error = Infallible;

    async fn load(&self, keys: &[Customer]) -> Result<HashMap<Customer, Self::Value>, Self::Error> {
        Ok(self.service.resolve_accounts_batch(keys))
    }
}
