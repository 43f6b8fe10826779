//! GraphQL type definitions
//!
//! This module contains the GraphQL object types that are exposed
//! through the API.

mod associated;
mod customer;

pub use associated::{Account, Profile};
pub use customer::Customer;
