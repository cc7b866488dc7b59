use axum::http::{HeaderValue, header::InvalidHeaderValue};
use config::{Config, ConfigError, Environment};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{self, env};

/// Runtime configuration of the credential service.
///
/// Sources, lowest priority first:
/// 1. built-in defaults
/// 2. `TURNSTILE__SECTION__KEY` environment variables
/// 3. the libpq-style `PG*` variables and `JWT_SECRET`
///
/// `auth.jwt_secret` has no default; loading fails without it.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub auth: AuthSettings,
    pub postgres: PostgresSettings,
    pub store: StoreBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    pub allowed_origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: Secret<String>,
    pub cookie_name: String,
    pub token_ttl_in_seconds: i64,
    pub hash_cost: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Secret<String>,
    pub database: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

const LEGACY_ENV_VARS: [(&str, &str); 6] = [
    ("auth.jwt_secret", env::JWT_SECRET_ENV_VAR),
    ("postgres.host", env::PGHOST_ENV_VAR),
    ("postgres.port", env::PGPORT_ENV_VAR),
    ("postgres.user", env::PGUSER_ENV_VAR),
    ("postgres.password", env::PGPASSWORD_ENV_VAR),
    ("postgres.database", env::PGDATABASE_ENV_VAR),
];

impl Settings {
    /// Load settings from `.env` and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Environment::with_prefix(env::PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true);

        Self::build(environment, |name| std::env::var(name).ok())
    }

    fn build<F>(environment: Environment, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Config::builder()
            .set_default("application.address", constants::prod::APP_ADDRESS)?
            .set_default("application.allowed_origin", constants::prod::ALLOWED_ORIGIN)?
            .set_default("auth.cookie_name", constants::SESSION_COOKIE_NAME)?
            .set_default("auth.token_ttl_in_seconds", constants::SESSION_TTL_IN_SECONDS)?
            .set_default("auth.hash_cost", i64::from(constants::PASSWORD_HASH_COST))?
            .set_default("postgres.host", "localhost")?
            .set_default("postgres.port", 5432_i64)?
            .set_default("postgres.user", "postgres")?
            .set_default("postgres.password", "")?
            .set_default("postgres.database", "postgres")?
            .set_default("store", "postgres")?
            .add_source(environment);

        for (key, var) in LEGACY_ENV_VARS {
            builder = builder.set_override_option(key, lookup(var))?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn allowed_origin(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::from_str(&self.application.allowed_origin)
    }
}
