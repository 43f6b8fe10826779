//! DataLoader implementations for GraphQL
//!
//! Sibling `account` and `profile` fields across one response are grouped
//! by these loaders, so associated records are resolved once per field per
//! batch instead of once per customer.

mod account;
mod profile;

pub use account::AccountLoader;
pub use profile::ProfileLoader;

use async_graphql::dataloader::DataLoader;
use graphql_demo_shared_config::BatchConfig;

use crate::services::AssociatedRecordService;

/// Container for all DataLoader instances
pub struct Loaders {
    pub account: DataLoader<AccountLoader>,
    pub profile: DataLoader<ProfileLoader>,
}

/// Create all data loaders for the GraphQL schema
///
/// Loaders are built without a cache: labels are timestamped on every
/// resolution and must not be replayed across requests.
pub fn create_loaders(service: AssociatedRecordService, batch: &BatchConfig) -> Loaders {
    Loaders {
        account: DataLoader::new(AccountLoader::new(service), tokio::spawn)
            .delay(batch.delay())
            .max_batch_size(batch.max_batch_size),
        profile: DataLoader::new(ProfileLoader::new(service), tokio::spawn)
            .delay(batch.delay())
            .max_batch_size(batch.max_batch_size),
    }
}
