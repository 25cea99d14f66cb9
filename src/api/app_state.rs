//! Application state

use std::sync::Arc;

use crate::security::auth::TokenVerifier;
use crate::security::identity::IdentityProvider;
use crate::services::account::{create_account_service, AccountService};
use crate::services::leaderboard::{create_leaderboard_service, LeaderboardService};
use crate::services::public_profile::{create_public_profile_service, PublicProfileService};
use crate::storage::StudyStore;

/// Shared per-process wiring. Holds no request state and no caches; every
/// request works on fresh snapshots from the store.
#[derive(Clone)]
pub struct AppState {
    /// Data-access adapter
    pub store: Arc<dyn StudyStore>,
    /// Leaderboard aggregation
    pub leaderboard_service: Arc<dyn LeaderboardService>,
    /// Public profile composition
    pub profile_service: Arc<dyn PublicProfileService>,
    /// Cascading account deletion
    pub account_service: Arc<dyn AccountService>,
    /// Session and re-auth token verification
    pub verifier: Arc<TokenVerifier>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &"Arc<dyn StudyStore>")
            .field("leaderboard_service", &"Arc<dyn LeaderboardService>")
            .field("profile_service", &"Arc<dyn PublicProfileService>")
            .field("account_service", &"Arc<dyn AccountService>")
            .field("verifier", &"Arc<TokenVerifier>")
            .finish()
    }
}

impl AppState {
    /// Wire services over an injected store and identity provider
    pub fn new(
        store: Arc<dyn StudyStore>,
        identity: Arc<dyn IdentityProvider>,
        verifier: TokenVerifier,
    ) -> Self {
        Self {
            leaderboard_service: Arc::from(create_leaderboard_service(store.clone())),
            profile_service: Arc::from(create_public_profile_service(store.clone())),
            account_service: Arc::from(create_account_service(store.clone(), identity)),
            store,
            verifier: Arc::new(verifier),
        }
    }
}
