use color_eyre::eyre::Result;
use tokio::net::TcpListener;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use turnstile_adapters::{
    auth::{JwtAuthConfig, JwtSessionCodec},
    config::{Settings, StoreBackend},
    hashing::BcryptPasswordHasher,
    http::SessionState,
    persistence::{InMemoryUserStore, PostgresUserStore},
};
use turnstile_service::{CredentialService, configure_postgresql, run_migrations};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = Settings::load()?;

    let session = SessionState::new(
        JwtSessionCodec::new(JwtAuthConfig {
            jwt_secret: settings.auth.jwt_secret.clone(),
            token_ttl_in_seconds: settings.auth.token_ttl_in_seconds,
        }),
        settings.auth.cookie_name.clone(),
    );
    let password_hasher = BcryptPasswordHasher::new(settings.auth.hash_cost);

    let credential_service = match settings.store {
        StoreBackend::Postgres => {
            let (pg_pool, connected) = configure_postgresql(&settings.postgres).await;
            if connected {
                run_migrations(&pg_pool).await?;
            }
            CredentialService::new(PostgresUserStore::new(pg_pool), password_hasher, session)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory user store; records are lost on exit");
            CredentialService::new(InMemoryUserStore::new(), password_hasher, session)
        }
    };

    let allowed_origin = settings.allowed_origin()?;
    let listener = TcpListener::bind(&settings.application.address).await?;

    credential_service
        .run_standalone(listener, Some(allowed_origin))
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
