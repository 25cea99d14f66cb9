//! External identity collaborator
//!
//! The identity record itself lives outside the relational store; deleting
//! it goes through the identity service's admin API. The trait keeps the
//! HTTP client out of the account service's way in tests.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::IdentityConfig;
use crate::error::{AppError, Result};
use crate::services::account::DeletionStep;

/// Deletes identity records held by the external identity service
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Remove the identity record for a user
    async fn delete_user(&self, user_id: &str) -> Result<()>;
}

/// Admin API client for the identity service
pub struct HttpIdentityProvider {
    client: Client,
    endpoint: String,
    key: String,
}

impl HttpIdentityProvider {
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            key: config.key.clone(),
        }
    }
}

fn identity_err(message: String) -> AppError {
    AppError::UpstreamWrite {
        step: DeletionStep::Identity,
        message,
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn delete_user(&self, user_id: &str) -> Result<()> {
        let url = format!("{}/admin/users/{}", self.endpoint, user_id);
        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.key)
            .send()
            .await
            .map_err(|e| identity_err(e.to_string()))?;

        if !response.status().is_success() {
            return Err(identity_err(format!(
                "identity service returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}
