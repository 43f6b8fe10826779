//! Profile DataLoader for batched resolution

use async_graphql::dataloader::Loader;
use std::collections::HashMap;
use std::convert::Infallible;

use crate::models::{Customer, Profile};
use crate::services::AssociatedRecordService;

/// DataLoader for batching profile resolution
#[derive(Clone)]
pub struct ProfileLoader {
    service: AssociatedRecordService,
}

impl ProfileLoader {
    pub fn new(service: AssociatedRecordService) -> Self {
        Self { service }
    }
}

impl Loader<Customer> for ProfileLoader {
    type Value = Profile;
    type Error = Infallible;

    async fn load(&self, keys: &[Customer]) -> Result<HashMap<Customer, Self::Value>, Self::Error> {
        Ok(self.service.resolve_profiles_batch(keys))
    }
}
