//! Business logic services for the GraphQL demo
//!
//! This module contains the logic that sits between the GraphQL layer and
//! the repositories:
//! - Resolution of associated records (accounts and profiles)

pub mod associated;

pub use associated::AssociatedRecordService;
