use secrecy::ExposeSecret;
use sqlx::{
    PgPool,
    migrate::MigrateError,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use turnstile_adapters::config::PostgresSettings;

/// Configure the PostgreSQL pool and probe the connection once.
///
/// A failed probe is logged and the pool is returned anyway: the service
/// still starts, and store calls fail per request until the database is
/// reachable.
///
/// # Returns
/// The pool and whether the startup probe connected
pub async fn configure_postgresql(settings: &PostgresSettings) -> (PgPool, bool) {
    let pg_pool = get_postgres_pool(settings);

    let connected = match pg_pool.acquire().await {
        Ok(_) => {
            tracing::info!("Connected to database.");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Database connection failed");
            false
        }
    };

    (pg_pool, connected)
}

/// Create a lazily connecting PostgreSQL pool
pub fn get_postgres_pool(settings: &PostgresSettings) -> PgPool {
    let options = PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(settings.password.expose_secret())
        .database(&settings.database);

    PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy_with(options)
}

/// Create the `register` table if it does not exist yet
pub async fn run_migrations(pg_pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pg_pool).await
}
