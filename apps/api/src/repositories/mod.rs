//! Storage layer for the GraphQL demo
//!
//! Repositories own stored entities and hand out clones; resolvers never
//! hold references into the underlying containers.

pub mod customer;

pub use customer::CustomerRepository;
