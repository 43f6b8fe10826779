//! Associated record models
//!
//! Accounts and profiles are never stored. They are recomputed from a
//! customer on every resolution and carry the customer's id plus a label
//! stamped with the generation time.

use chrono::{DateTime, SecondsFormat, Utc};

use super::Customer;

/// Label prefix for generated accounts
pub const ACCOUNT_LABEL_PREFIX: &str = "Account@";

/// Label prefix for generated profiles
pub const PROFILE_LABEL_PREFIX: &str = "Profile@";

/// Account derived from a customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Id of the customer this account belongs to
    pub id: i32,

    /// `Account@<RFC 3339 timestamp>`
    pub label: String,
}

/// Profile derived from a customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Id of the customer this profile belongs to
    pub id: i32,

    /// `Profile@<RFC 3339 timestamp>`
    pub label: String,
}

impl Account {
    /// Derive the account of `customer` as of `at`
    pub fn derive(customer: &Customer, at: DateTime<Utc>) -> Self {
        Self {
            id: customer.id,
            label: stamped_label(ACCOUNT_LABEL_PREFIX, at),
        }
    }
}

impl Profile {
    /// Derive the profile of `customer` as of `at`
    pub fn derive(customer: &Customer, at: DateTime<Utc>) -> Self {
        Self {
            id: customer.id,
            label: stamped_label(PROFILE_LABEL_PREFIX, at),
        }
    }
}

fn stamped_label(prefix: &str, at: DateTime<Utc>) -> String {
    format!("{}{}", prefix, at.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}
