//! Customer model

use serde::{Deserialize, Serialize};

/// Customer record held by the customer repository
///
/// Equality and hashing cover the whole record so a customer can key the
/// result map of a batch resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    /// Identifier assigned by the repository, never reused
    pub id: i32,

    /// Display name
    pub name: String,
}

impl Customer {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
