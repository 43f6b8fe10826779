//! Domain models for the GraphQL demo
//!
//! This module contains:
//! - Customers, the only stored entity
//! - Accounts and profiles, derived on demand from a customer

pub mod associated;
pub mod customer;

pub use associated::{Account, Profile};
pub use customer::Customer;
