use axum::{
    Router,
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, CorsLayer},
    trace::TraceLayer,
};
use turnstile_adapters::http::{
    SessionState,
    routes::{identify, login, logout, register},
    verify_user,
};
use turnstile_core::{PasswordHasher, SessionTokenCodec, UserStore};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Credential service: registration, login, identity lookup and logout
pub struct CredentialService {
    router: Router,
}

impl CredentialService {
    /// Create a new CredentialService with the provided store, hasher and session codec
    ///
    /// # Arguments
    /// * `user_store` - Credential store holding user records (must be Clone)
    /// * `password_hasher` - Adaptive password hash (must be Clone)
    /// * `session` - Session token codec and cookie name
    ///
    /// # Note on Architecture
    /// Each route is given only the state it needs. The store is the only
    /// resource shared across requests.
    pub fn new<U, H, C>(user_store: U, password_hasher: H, session: SessionState<C>) -> Self
    where
        U: UserStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        C: SessionTokenCodec + Clone + 'static,
    {
        // Identity lookup sits behind the session check
        let identified = Router::new()
            .route("/", get(identify))
            .route_layer(middleware::from_fn_with_state(
                session.clone(),
                verify_user::<C>,
            ));

        let router = Router::new()
            // Register needs user store and hasher
            .route("/register", post(register::<U, H>))
            .with_state((user_store.clone(), password_hasher.clone()))
            // Login needs user store, hasher and session codec
            .route("/login", post(login::<U, H, C>))
            .with_state((user_store, password_hasher, session.clone()))
            // Logout only needs the cookie name
            .route("/logout", post(logout::<C>))
            .with_state(session)
            .merge(identified);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the CredentialService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origin` - Optional frontend origin allowed to call with credentials
    pub fn as_nested_router(mut self, allowed_origin: Option<HeaderValue>) -> Router {
        if let Some(allowed_origin) = allowed_origin {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
                .allow_origin(allowed_origin);

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the credential service as a standalone server
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origin: Option<HeaderValue>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origin);

        tracing::info!("Credential service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
