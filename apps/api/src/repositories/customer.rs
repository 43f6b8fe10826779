//! Customer repository backed by an in-memory map
//!
//! This module owns every stored customer. The map and the id counter sit
//! behind a single lock, so each operation is atomic with respect to all
//! others and concurrent writes to the same id resolve last-writer-wins.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{ApiError, ApiResult};
use crate::models::Customer;

const RESOURCE_TYPE: &str = "customer";

#[derive(Debug, Default)]
struct CustomerTable {
    rows: BTreeMap<i32, Customer>,
    /// Highest id handed out so far; ids of deleted rows stay consumed
    last_id: i32,
}

/// Repository for customer records
///
/// Clones share the same underlying table.
#[derive(Debug, Clone, Default)]
pub struct CustomerRepository {
    table: Arc<RwLock<CustomerTable>>,
}

impl CustomerRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every stored customer, ordered by id
    pub async fn list(&self) -> Vec<Customer> {
        self.table.read().await.rows.values().cloned().collect()
    }

    /// Number of stored customers
    pub async fn count(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Store a new customer under the next free id
    ///
    /// Ids start at 1 and grow by one per call. Fails only once the id
    /// space is exhausted.
    pub async fn create(&self, name: impl Into<String>) -> ApiResult<Customer> {
        let mut table = self.table.write().await;

        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| ApiError::Internal("customer id space exhausted".to_string()))?;
        table.last_id = id;

        let customer = Customer::new(id, name);
        table.rows.insert(id, customer.clone());

        Ok(customer)
    }

    /// Find a customer by id
    pub async fn find_by_id(&self, id: i32) -> Option<Customer> {
        self.table.read().await.rows.get(&id).cloned()
    }

    /// Replace the name of an existing customer
    pub async fn update(&self, id: i32, name: impl Into<String>) -> ApiResult<Customer> {
        let mut table = self.table.write().await;

        let customer = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| ApiError::not_found(RESOURCE_TYPE, id))?;
        customer.name = name.into();

        Ok(customer.clone())
    }

    /// Remove a customer, returning the removed record
    pub async fn delete(&self, id: i32) -> ApiResult<Customer> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .ok_or_else(|| ApiError::not_found(RESOURCE_TYPE, id))
    }
}
