//! Token verification
//!
//! The core does not issue sessions; it verifies bearer tokens minted by
//! the identity collaborator, plus the short-lived re-authentication token
//! required for account deletion.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Claim carried by re-authentication tokens
pub const REAUTH_PURPOSE: &str = "reauth";

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user id
    pub sub: String,
    /// Expiration timestamp
    pub exp: usize,
    /// Token purpose; session tokens carry none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

/// Extract the token from an `Authorization: Bearer` header value
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    match header {
        Some(value) if value.starts_with("Bearer ") => Some(&value[7..]),
        _ => None,
    }
}

/// Verifies HS256 tokens against the shared secret
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify a session bearer token and return its claims
    pub fn verify_session(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::Unauthorized(format!("invalid session token: {e}")))?;
        Ok(data.claims)
    }

    /// Verify a short-lived re-authentication token for the given subject.
    ///
    /// The token must carry the `reauth` purpose and match the session
    /// subject; expiry is enforced by the decoder.
    pub fn verify_reauth(&self, token: &str, expected_sub: &str) -> Result<()> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::Unauthorized(format!("invalid re-auth token: {e}")))?;

        if data.claims.purpose.as_deref() != Some(REAUTH_PURPOSE) {
            return Err(AppError::Unauthorized(
                "re-auth token has wrong purpose".to_string(),
            ));
        }
        if data.claims.sub != expected_sub {
            return Err(AppError::Unauthorized(
                "re-auth token subject mismatch".to_string(),
            ));
        }
        Ok(())
    }
}
