use std::sync::Arc;

use fake::{
    Fake,
    faker::{
        internet::en::SafeEmail,
        name::en::{FirstName, LastName},
    },
};
use reqwest::{cookie::Jar, header::SET_COOKIE};
use secrecy::Secret;
use serde::Serialize;
use tokio::net::TcpListener;
use turnstile_adapters::{
    auth::{JwtAuthConfig, JwtSessionCodec},
    config::constants::{SESSION_COOKIE_NAME, SESSION_TTL_IN_SECONDS, test},
    hashing::BcryptPasswordHasher,
    http::SessionState,
    persistence::InMemoryUserStore,
};
use turnstile_service::CredentialService;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

pub struct TestApp {
    pub address: String,
    pub cookie_jar: Arc<Jar>,
    pub http_client: reqwest::Client,
    pub user_store: InMemoryUserStore,
    pub codec: JwtSessionCodec,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterBody {
    #[serde(rename = "FName")]
    pub first_name: String,
    #[serde(rename = "LName")]
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterBody {
    pub fn random() -> Self {
        Self {
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            email: SafeEmail().fake(),
            password: "correct horse battery staple".to_owned(),
        }
    }

    pub fn login_body(&self) -> serde_json::Value {
        serde_json::json!({ "email": self.email, "password": self.password })
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let user_store = InMemoryUserStore::new();
        let codec = JwtSessionCodec::new(JwtAuthConfig {
            jwt_secret: Secret::from(TEST_JWT_SECRET.to_owned()),
            token_ttl_in_seconds: SESSION_TTL_IN_SECONDS,
        });

        let credential_service = CredentialService::new(
            user_store.clone(),
            BcryptPasswordHasher::new(test::PASSWORD_HASH_COST),
            SessionState::new(codec.clone(), SESSION_COOKIE_NAME),
        );

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(credential_service.run_standalone(listener, None));

        let cookie_jar = Arc::new(Jar::default());
        let http_client = reqwest::Client::builder()
            .cookie_provider(cookie_jar.clone())
            .build()
            .unwrap();

        Self {
            address,
            cookie_jar,
            http_client,
            user_store,
            codec,
        }
    }

    pub async fn get_root(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// GET / with an explicit cookie header, bypassing the client's jar
    pub async fn get_root_with_token(&self, token: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}/", &self.address))
            .header(reqwest::header::COOKIE, format!("{SESSION_COOKIE_NAME}={token}"))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_register<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.http_client
            .post(format!("{}/register", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.http_client
            .post(format!("{}/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_logout(&self) -> reqwest::Response {
        self.http_client
            .post(format!("{}/logout", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Value and attributes of the `token` Set-Cookie header, if any
pub fn session_set_cookie(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with(&format!("{SESSION_COOKIE_NAME}=")))
        .map(str::to_owned)
}

/// Token value out of a `token=<value>; ...` Set-Cookie header
pub fn token_value(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .and_then(|pair| pair.split_once('='))
        .map(|(_, value)| value.to_owned())
        .unwrap_or_default()
}

pub async fn json_body(response: reqwest::Response) -> serde_json::Value {
    assert_eq!(response.status().as_u16(), 200);
    response
        .json()
        .await
        .expect("Response body is not JSON")
}
