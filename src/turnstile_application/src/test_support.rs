//! Hand-rolled port doubles shared by the use case tests.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use turnstile_core::{
    DisplayName, Email, Password, PasswordHash, PasswordHashError, PasswordHasher, SessionClaims,
    SessionToken, SessionTokenCodec, SessionTokenError, User, UserStore, UserStoreError,
};

pub fn email(raw: &str) -> Email {
    Email::from(Secret::from(raw.to_owned()))
}

pub fn password(raw: &str) -> Password {
    Password::from(Secret::from(raw.to_owned()))
}

#[derive(Clone, Default)]
pub struct MockUserStore {
    pub rows: Arc<RwLock<Vec<User>>>,
    pub fail_lookup: Arc<AtomicBool>,
    pub fail_insert: Arc<AtomicBool>,
}

impl MockUserStore {
    pub async fn with_user(first_name: &str, email_addr: &str, hash: &str) -> Self {
        let store = Self::default();
        store.rows.write().await.push(User::new(
            first_name.to_owned(),
            "Lee".to_owned(),
            email(email_addr),
            PasswordHash::from(Secret::from(hash.to_owned())),
        ));
        store
    }

    pub async fn count(&self, email_addr: &str) -> usize {
        let wanted = email(email_addr);
        self.rows
            .read()
            .await
            .iter()
            .filter(|user| user.email() == &wanted)
            .count()
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        if self.fail_lookup.load(Ordering::SeqCst) {
            return Err(UserStoreError::Unavailable("connection refused".to_owned()));
        }
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn insert(&self, user: User) -> Result<(), UserStoreError> {
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(UserStoreError::Unavailable("connection reset".to_owned()));
        }
        self.rows.write().await.push(user);
        Ok(())
    }
}

/// Prefixes the plaintext; hashes without the prefix are treated as malformed.
#[derive(Clone, Default)]
pub struct MockPasswordHasher {
    pub fail_hash: bool,
}

#[async_trait::async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHashError> {
        if self.fail_hash {
            return Err(PasswordHashError::Hash("invalid cost".to_owned()));
        }
        let hashed = format!("hashed:{}", password.as_ref().expose_secret());
        Ok(PasswordHash::from(Secret::from(hashed)))
    }

    async fn verify(
        &self,
        password: &Password,
        expected: &PasswordHash,
    ) -> Result<bool, PasswordHashError> {
        let stored = expected
            .as_ref()
            .expose_secret()
            .strip_prefix("hashed:")
            .ok_or_else(|| PasswordHashError::Verify("malformed hash".to_owned()))?;
        Ok(stored == password.as_ref().expose_secret())
    }
}

/// Tokens are `token-for:<name>`; anything else fails verification.
#[derive(Clone, Default)]
pub struct MockSessionTokenCodec;

impl SessionTokenCodec for MockSessionTokenCodec {
    fn issue(&self, name: &DisplayName) -> Result<SessionToken, SessionTokenError> {
        Ok(SessionToken::from(format!("token-for:{name}")))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, SessionTokenError> {
        let name = token
            .strip_prefix("token-for:")
            .ok_or_else(|| SessionTokenError::Invalid("bad signature".to_owned()))?;
        Ok(SessionClaims::new(DisplayName::new(name), 0, 86_400))
    }
}
