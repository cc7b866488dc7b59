use secrecy::{ExposeSecret, Secret};

/// Plaintext password as presented by the client. Never persisted.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn new(password: Secret<String>) -> Self {
        Self(password)
    }
}

impl From<Secret<String>> for Password {
    fn from(password: Secret<String>) -> Self {
        Self::new(password)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Output of the adaptive password hash, salt and cost factor embedded.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }

    /// True when the stored value is literally the given plaintext.
    pub fn is_plaintext_of(&self, password: &Password) -> bool {
        self.0.expose_secret() == password.as_ref().expose_secret()
    }
}

impl From<Secret<String>> for PasswordHash {
    fn from(hash: Secret<String>) -> Self {
        Self::new(hash)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
