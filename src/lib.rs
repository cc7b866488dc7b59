//! # Turnstile - Credential Service Library
//!
//! Facade crate that re-exports the public APIs of the credential service
//! components: registration, login, identity lookup and logout.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! turnstile = { path = "../turnstile" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `DisplayName`, etc.
//! - **Ports**: `UserStore`, `PasswordHasher`, `SessionTokenCodec`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `AuthenticateUseCase`
//! - **Adapters**: `PostgresUserStore`, `InMemoryUserStore`, `BcryptPasswordHasher`, `JwtSessionCodec`
//! - **Service**: `CredentialService`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use turnstile_core::*;
}

pub use turnstile_core::{
    DisplayName, Email, Password, PasswordHash, SessionClaims, SessionToken, User,
};

// ============================================================================
// Ports
// ============================================================================

/// Store and service trait definitions
pub mod ports {
    pub use turnstile_core::{
        PasswordHashError, PasswordHasher, SessionTokenCodec, SessionTokenError, UserStore,
        UserStoreError,
    };
}

pub use ports::{PasswordHasher, SessionTokenCodec, UserStore, UserStoreError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use turnstile_application::*;
}

pub use turnstile_application::{AuthenticateUseCase, LoginUseCase, RegisterUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers and session middleware
    pub mod http {
        pub use turnstile_adapters::http::*;
    }

    /// Credential store implementations
    pub mod persistence {
        pub use turnstile_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use turnstile_adapters::hashing::*;
    }

    /// JWT session tokens and cookies
    pub mod auth {
        pub use turnstile_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use turnstile_adapters::config::*;
    }
}

pub use turnstile_adapters::{
    auth::JwtSessionCodec,
    hashing::BcryptPasswordHasher,
    persistence::{InMemoryUserStore, PostgresUserStore},
};

// ============================================================================
// Credential Service (Main Entry Point)
// ============================================================================

/// Main credential service
pub use turnstile_service::{CredentialService, configure_postgresql, run_migrations};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing store traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
