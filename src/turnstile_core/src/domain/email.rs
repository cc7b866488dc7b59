use std::hash::{Hash, Hasher};

use secrecy::{ExposeSecret, Secret};

/// Email address identifying a user record.
///
/// Compared byte-for-byte: no trimming, no case folding. Two addresses that
/// differ only in case identify two different records.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn new(email: Secret<String>) -> Self {
        Self(email)
    }
}

impl From<Secret<String>> for Email {
    fn from(email: Secret<String>) -> Self {
        Self::new(email)
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
