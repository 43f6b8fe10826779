//! Account and Profile GraphQL types

use async_graphql::Object;

use crate::models::{Account as DbAccount, Profile as DbProfile};

/// Account derived from a customer
pub struct Account {
    inner: DbAccount,
}

impl From<DbAccount> for Account {
    fn from(account: DbAccount) -> Self {
        Self { inner: account }
    }
}

#[Object]
impl Account {
    /// Id of the owning customer
    async fn id(&self) -> i32 {
        self.inner.id
    }

    /// Generated label, `Account@` followed by the generation time
    async fn label(&self) -> &str {
        &self.inner.label
    }
}

/// Profile derived from a customer
pub struct Profile {
    inner: DbProfile,
}

impl From<DbProfile> for Profile {
    fn from(profile: DbProfile) -> Self {
        Self { inner: profile }
    }
}

#[Object]
impl Profile {
    /// Id of the owning customer
    async fn id(&self) -> i32 {
        self.inner.id
    }

    /// Generated label, `Profile@` followed by the generation time
    async fn label(&self) -> &str {
        &self.inner.label
    }
}
