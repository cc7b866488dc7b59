use std::sync::Arc;

use tokio::sync::RwLock;
use turnstile_core::{Email, User, UserStore, UserStoreError};

/// Process-local stand-in for the `register` table.
///
/// Rows are kept in insertion order and, like the table, nothing stops two
/// rows from sharing an email.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    rows: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows stored for `email`.
    pub async fn count_by_email(&self, email: &Email) -> usize {
        self.rows
            .read()
            .await
            .iter()
            .filter(|user| user.email() == email)
            .count()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn insert(&self, user: User) -> Result<(), UserStoreError> {
        self.rows.write().await.push(user);
        Ok(())
    }
}
