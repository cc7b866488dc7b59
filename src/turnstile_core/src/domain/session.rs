use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::display_name::DisplayName;

/// Signed, encoded session token as handed to the client.
#[derive(Debug, Clone)]
pub struct SessionToken(Secret<String>);

impl SessionToken {
    pub fn new(token: Secret<String>) -> Self {
        Self(token)
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        Self(Secret::from(token))
    }
}

/// Claims carried inside a session token.
///
/// `iat` and `exp` are seconds since the Unix epoch. There is no subject
/// identifier: the token only knows the display name it was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub name: DisplayName,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn new(name: DisplayName, issued_at: i64, ttl_in_seconds: i64) -> Self {
        Self {
            name,
            iat: issued_at,
            exp: issued_at.saturating_add(ttl_in_seconds),
        }
    }
}
