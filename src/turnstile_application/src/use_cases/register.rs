use turnstile_core::{
    Email, Password, PasswordHashError, PasswordHasher, User, UserStore, UserStoreError,
};

/// Error types specific to register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Failed to look up email: {0}")]
    LookupFailed(#[source] UserStoreError),
    #[error("Email already exists")]
    AlreadyExists,
    #[error("Password hashing error: {0}")]
    HashingFailed(#[from] PasswordHashError),
    #[error("Failed to insert user: {0}")]
    InsertFailed(#[source] UserStoreError),
}

/// Register use case - creates a user record with a hashed password
pub struct RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
}

impl<'a, U, H> RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, password_hasher: &'a H) -> Self {
        Self {
            user_store,
            password_hasher,
        }
    }

    /// Execute the register use case
    ///
    /// The existence check and the insert are two independent store calls.
    /// Two concurrent registrations for the same email can both pass the
    /// check and both insert, unless the store itself rejects the second.
    ///
    /// # Returns
    /// Ok(()) once the record is stored, or the first failing step as RegisterError
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        first_name: String,
        last_name: String,
        email: Email,
        password: Password,
    ) -> Result<(), RegisterError> {
        let existing = self
            .user_store
            .find_by_email(&email)
            .await
            .map_err(RegisterError::LookupFailed)?;

        if existing.is_some() {
            return Err(RegisterError::AlreadyExists);
        }

        let password_hash = self.password_hasher.hash(&password).await?;
        let user = User::new(first_name, last_name, email, password_hash);

        self.user_store
            .insert(user)
            .await
            .map_err(RegisterError::InsertFailed)
    }
}
