use turnstile_core::{
    DisplayName, Email, Password, PasswordHashError, PasswordHasher, SessionToken,
    SessionTokenCodec, SessionTokenError, UserStore, UserStoreError,
};

/// Response from login use case
#[derive(Debug)]
pub struct LoginResponse {
    /// Name embedded in the token
    pub name: DisplayName,
    pub token: SessionToken,
}

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Failed to fetch user: {0}")]
    LookupFailed(#[from] UserStoreError),
    #[error("Email not registered")]
    NotRegistered,
    #[error("Password comparison error: {0}")]
    ComparisonFailed(#[from] PasswordHashError),
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Session token error: {0}")]
    TokenIssueFailed(#[from] SessionTokenError),
}

/// Login use case - checks credentials and mints a session token
pub struct LoginUseCase<'a, U, H, C>
where
    U: UserStore,
    H: PasswordHasher,
    C: SessionTokenCodec,
{
    user_store: &'a U,
    password_hasher: &'a H,
    token_codec: &'a C,
}

impl<'a, U, H, C> LoginUseCase<'a, U, H, C>
where
    U: UserStore,
    H: PasswordHasher,
    C: SessionTokenCodec,
{
    pub fn new(user_store: &'a U, password_hasher: &'a H, token_codec: &'a C) -> Self {
        Self {
            user_store,
            password_hasher,
            token_codec,
        }
    }

    /// Execute the login use case
    ///
    /// No attempt counting and no lockout: every call is judged on its own.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<LoginResponse, LoginError> {
        let user = self
            .user_store
            .find_by_email(&email)
            .await?
            .ok_or(LoginError::NotRegistered)?;

        let matches = self
            .password_hasher
            .verify(&password, user.password_hash())
            .await?;

        if !matches {
            return Err(LoginError::IncorrectPassword);
        }

        let name = user.display_name();
        let token = self.token_codec.issue(&name)?;

        Ok(LoginResponse { name, token })
    }
}
