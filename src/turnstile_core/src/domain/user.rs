use crate::domain::{display_name::DisplayName, email::Email, password::PasswordHash};

/// A row of the credential store.
#[derive(Debug, Clone)]
pub struct User {
    first_name: String,
    last_name: String,
    email: Email,
    password_hash: PasswordHash,
}

impl User {
    pub fn new(
        first_name: String,
        last_name: String,
        email: Email,
        password_hash: PasswordHash,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            password_hash,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// The name carried by session tokens minted for this user.
    pub fn display_name(&self) -> DisplayName {
        DisplayName::new(self.first_name.clone())
    }
}
