use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use turnstile_application::{AuthenticateError, LoginError, RegisterError};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: String,
}

/// Failures as the frontend sees them. The display strings are the wire
/// messages and must not change.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("You are not Authenticated")]
    Unauthenticated,

    #[error("Token not verified")]
    TokenNotVerified,

    #[error("Error checking email in server")]
    EmailCheckFailed,

    #[error("Email already exists.")]
    EmailAlreadyExists,

    #[error("Error hashing password")]
    HashingFailed,

    #[error("Error inserting data into server")]
    InsertFailed,

    #[error("Error fetching data from server")]
    FetchFailed,

    #[error("Email Not Registered")]
    EmailNotRegistered,

    #[error("Error comparing passwords")]
    ComparisonFailed,

    #[error("Incorrect Password")]
    IncorrectPassword,

    #[error("Error signing token")]
    TokenSigningFailed,
}

// Clients detect failure from the body shape, never from the status code.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (StatusCode::OK, body).into_response()
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        tracing::debug!(error = %error, "register failed");
        match error {
            RegisterError::LookupFailed(_) => ApiError::EmailCheckFailed,
            RegisterError::AlreadyExists => ApiError::EmailAlreadyExists,
            RegisterError::HashingFailed(_) => ApiError::HashingFailed,
            RegisterError::InsertFailed(_) => ApiError::InsertFailed,
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        tracing::debug!(error = %error, "login failed");
        match error {
            LoginError::LookupFailed(_) => ApiError::FetchFailed,
            LoginError::NotRegistered => ApiError::EmailNotRegistered,
            LoginError::ComparisonFailed(_) => ApiError::ComparisonFailed,
            LoginError::IncorrectPassword => ApiError::IncorrectPassword,
            LoginError::TokenIssueFailed(_) => ApiError::TokenSigningFailed,
        }
    }
}

impl From<AuthenticateError> for ApiError {
    fn from(error: AuthenticateError) -> Self {
        match error {
            AuthenticateError::Unauthenticated => ApiError::Unauthenticated,
            AuthenticateError::TokenInvalid(_) => ApiError::TokenNotVerified,
        }
    }
}
