use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    display_name::DisplayName,
    password::{Password, PasswordHash},
    session::{SessionClaims, SessionToken},
};

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Failed to hash password: {0}")]
    Hash(String),
    #[error("Failed to verify password: {0}")]
    Verify(String),
}

/// Port trait for the slow, salted password hash
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHashError>;

    /// `Ok(false)` on mismatch. `Err` only when the comparison itself could
    /// not run, e.g. a malformed stored hash.
    async fn verify(
        &self,
        password: &Password,
        expected: &PasswordHash,
    ) -> Result<bool, PasswordHashError>;
}

#[derive(Debug, Error)]
pub enum SessionTokenError {
    #[error("Failed to sign session token: {0}")]
    Signing(String),
    #[error("Invalid session token: {0}")]
    Invalid(String),
}

/// Port trait for minting and verifying stateless session tokens
pub trait SessionTokenCodec: Send + Sync {
    fn issue(&self, name: &DisplayName) -> Result<SessionToken, SessionTokenError>;
    fn verify(&self, token: &str) -> Result<SessionClaims, SessionTokenError>;
}
