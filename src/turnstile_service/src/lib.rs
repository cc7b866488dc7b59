mod credential_service;
mod helpers;
mod tracing;

pub use credential_service::CredentialService;
pub use helpers::{configure_postgresql, get_postgres_pool, run_migrations};
