//! Account deletion
//!
//! Ordered cascading delete: dependent completion rows, then the profile
//! row, then the external identity record. A mid-sequence failure stops the
//! process and reports which step failed; earlier deletes are not rolled
//! back.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::error::Result;
use crate::security::identity::IdentityProvider;
use crate::storage::StudyStore;

/// Steps of the cascading deletion, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionStep {
    /// Completion records for the account
    Completions,
    /// The profile row
    Profile,
    /// The external identity record
    Identity,
}

impl fmt::Display for DeletionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletionStep::Completions => write!(f, "completions"),
            DeletionStep::Profile => write!(f, "profile"),
            DeletionStep::Identity => write!(f, "identity"),
        }
    }
}

/// Account service trait
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Delete the caller's own account, dependents first
    async fn delete_account(&self, user_id: &str) -> Result<()>;
}

/// Account service implementation
pub struct AccountServiceImpl {
    store: Arc<dyn StudyStore>,
    identity: Arc<dyn IdentityProvider>,
}

impl AccountServiceImpl {
    pub fn new(store: Arc<dyn StudyStore>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { store, identity }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn delete_account(&self, user_id: &str) -> Result<()> {
        // Dependent rows before the parent identity row; the external
        // record goes last, only after every store delete succeeded.
        self.store.delete_completions_for_user(user_id).await?;
        self.store.delete_profile(user_id).await?;
        self.identity.delete_user(user_id).await?;

        info!("account deleted: {user_id}");
        Ok(())
    }
}

/// Create an account service instance
pub fn create_account_service(
    store: Arc<dyn StudyStore>,
    identity: Arc<dyn IdentityProvider>,
) -> Box<dyn AccountService> {
    Box::new(AccountServiceImpl::new(store, identity))
}
