use turnstile_core::{DisplayName, SessionTokenCodec, SessionTokenError};

/// Error types for authenticate use case
#[derive(Debug, thiserror::Error)]
pub enum AuthenticateError {
    #[error("No session token presented")]
    Unauthenticated,
    #[error("Session token rejected: {0}")]
    TokenInvalid(#[from] SessionTokenError),
}

/// Authenticate use case - resolves a presented session token to the caller's name
///
/// The name is taken from the token as-is. The credential store is not
/// consulted, so a token outlives changes to the record it was minted from.
pub struct AuthenticateUseCase<'a, C>
where
    C: SessionTokenCodec,
{
    token_codec: &'a C,
}

impl<'a, C> AuthenticateUseCase<'a, C>
where
    C: SessionTokenCodec,
{
    pub fn new(token_codec: &'a C) -> Self {
        Self { token_codec }
    }

    #[tracing::instrument(name = "AuthenticateUseCase::execute", skip_all)]
    pub fn execute(&self, token: Option<&str>) -> Result<DisplayName, AuthenticateError> {
        let token = token.ok_or(AuthenticateError::Unauthenticated)?;
        let claims = self.token_codec.verify(token)?;
        Ok(claims.name)
    }
}
