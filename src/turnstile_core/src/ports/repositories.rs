use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, user::User};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User store unavailable: {0}")]
    Unavailable(String),
}

/// Credential store holding user records.
///
/// Email uniqueness is not a contract of this trait: `insert` appends the
/// record without checking for an existing one, like a table without a
/// unique constraint. Callers check with `find_by_email` first.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// First record whose email matches exactly, if any.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError>;
    async fn insert(&self, user: User) -> Result<(), UserStoreError>;
}
