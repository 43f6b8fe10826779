//! Associated record resolution
//!
//! Accounts and profiles are derived from a customer on demand. The batch
//! variants resolve a whole list of sibling customers in one call and key
//! the results by customer, which is what the GraphQL loaders hand back to
//! the executor.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{Account, Customer, Profile};

/// Source of generation timestamps
pub type Clock = fn() -> DateTime<Utc>;

/// Derives accounts and profiles from customers
///
/// Holds no shared state; resolution depends only on the input and the clock.
#[derive(Debug, Clone, Copy)]
pub struct AssociatedRecordService {
    clock: Clock,
}

impl AssociatedRecordService {
    /// Create a service stamping labels with the system time
    pub fn new() -> Self {
        Self { clock: Utc::now }
    }

    /// Create a service with a custom clock
    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }

    pub fn resolve_account(&self, customer: &Customer) -> Account {
        Account::derive(customer, (self.clock)())
    }

    pub fn resolve_profile(&self, customer: &Customer) -> Profile {
        Profile::derive(customer, (self.clock)())
    }

    /// Resolve the account of every customer in `customers`
    ///
    /// The result holds exactly one entry per distinct input customer.
    pub fn resolve_accounts_batch(&self, customers: &[Customer]) -> HashMap<Customer, Account> {
        tracing::debug!(count = customers.len(), "Resolving account batch");

        customers
            .iter()
            .map(|customer| (customer.clone(), self.resolve_account(customer)))
            .collect()
    }

    /// Resolve the profile of every customer in `customers`
    ///
    /// The result holds exactly one entry per distinct input customer.
    pub fn resolve_profiles_batch(&self, customers: &[Customer]) -> HashMap<Customer, Profile> {
        tracing::debug!(count = customers.len(), "Resolving profile batch");

        customers
            .iter()
            .map(|customer| (customer.clone(), self.resolve_profile(customer)))
            .collect()
    }
}

impl Default for AssociatedRecordService {
    fn default() -> Self {
        Self::new()
    }
}
