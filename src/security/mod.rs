//! Security module
//!
//! Session issuance and login flows belong to the identity collaborator;
//! this module only verifies what it minted and talks to its admin API.

pub mod auth;
pub mod identity;
pub mod middleware;

pub use auth::{bearer_token, Claims, TokenVerifier, REAUTH_PURPOSE};
pub use identity::{HttpIdentityProvider, IdentityProvider};
