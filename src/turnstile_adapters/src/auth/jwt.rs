use axum_extra::extract::{CookieJar, cookie::Cookie};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use turnstile_core::{
    DisplayName, SessionClaims, SessionToken, SessionTokenCodec, SessionTokenError,
};

#[derive(Debug, Clone)]
pub struct JwtAuthConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtAuthConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

/// HS256 session tokens signed with a shared secret.
///
/// Verification is purely cryptographic: there is no revocation list, so a
/// token stays valid until `exp` no matter what happened server-side.
#[derive(Debug, Clone)]
pub struct JwtSessionCodec {
    config: JwtAuthConfig,
}

impl JwtSessionCodec {
    pub fn new(config: JwtAuthConfig) -> Self {
        Self { config }
    }

    /// Mint a token as if issued at `issued_at` (seconds since epoch)
    pub fn issue_at(
        &self,
        name: &DisplayName,
        issued_at: i64,
    ) -> Result<SessionToken, SessionTokenError> {
        let claims = SessionClaims::new(name.clone(), issued_at, self.config.token_ttl_in_seconds);

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.as_bytes()),
        )
        .map(SessionToken::from)
        .map_err(|e| SessionTokenError::Signing(e.to_string()))
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation
    }
}

impl SessionTokenCodec for JwtSessionCodec {
    fn issue(&self, name: &DisplayName) -> Result<SessionToken, SessionTokenError> {
        self.issue_at(name, Utc::now().timestamp())
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, SessionTokenError> {
        let claims = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.config.as_bytes()),
            &Self::validation(),
        )
        .map(|data| data.claims)
        .map_err(|e| SessionTokenError::Invalid(e.to_string()))?;

        // A token is dead from the second `exp` is reached, not after it.
        if claims.exp <= Utc::now().timestamp() {
            return Err(SessionTokenError::Invalid("ExpiredSignature".to_owned()));
        }

        Ok(claims)
    }
}

/// Session token presented in the request cookies. An empty value counts as absent.
pub fn extract_token<'a>(jar: &'a CookieJar, cookie_name: &str) -> Option<&'a str> {
    jar.get(cookie_name)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
}

// HTTP-only, whole-site cookie. No Secure, SameSite or expiry attributes:
// the token's own `exp` is the only lifetime.
pub fn create_session_cookie(token: &SessionToken, cookie_name: &str) -> Cookie<'static> {
    Cookie::build((cookie_name.to_owned(), token.expose().to_owned()))
        .path("/")
        .http_only(true)
        .build()
}

pub fn create_removal_cookie(cookie_name: &str) -> Cookie<'static> {
    let mut cookie = Cookie::build((cookie_name.to_owned(), String::new()))
        .path("/")
        .build();
    cookie.make_removal();
    cookie
}
