use secrecy::{ExposeSecret, Secret};
use turnstile_core::{Password, PasswordHash, PasswordHashError, PasswordHasher};

/// bcrypt hasher. Work runs on the blocking pool so the runtime keeps serving
/// other requests while a hash is computed.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait::async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHashError> {
        let current_span: tracing::Span = tracing::Span::current();
        let password = password.clone();
        let cost = self.cost;

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                bcrypt::hash(password.as_ref().expose_secret(), cost)
                    .map(|h| PasswordHash::from(Secret::from(h)))
                    .map_err(|e| PasswordHashError::Hash(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHashError::Hash(e.to_string()))?;

        result
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        password: &Password,
        expected: &PasswordHash,
    ) -> Result<bool, PasswordHashError> {
        let current_span: tracing::Span = tracing::Span::current();
        let password = password.clone();
        let expected = expected.clone();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                bcrypt::verify(
                    password.as_ref().expose_secret(),
                    expected.as_ref().expose_secret(),
                )
                .map_err(|e| PasswordHashError::Verify(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHashError::Verify(e.to_string()))?;

        result
    }
}
