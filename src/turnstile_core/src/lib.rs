pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    display_name::DisplayName,
    email::Email,
    password::{Password, PasswordHash},
    session::{SessionClaims, SessionToken},
    user::User,
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{PasswordHashError, PasswordHasher, SessionTokenCodec, SessionTokenError},
};
