//! HTTP middleware for the API
//!
//! This module contains tower layers applied to every route:
//! - CORS policy derived from configuration

pub mod cors;

pub use cors::build_cors_layer;
