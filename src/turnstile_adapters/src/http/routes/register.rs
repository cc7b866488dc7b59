use axum::{Json, extract::State};
use secrecy::Secret;
use serde::Deserialize;
use turnstile_application::RegisterUseCase;
use turnstile_core::{Email, Password, PasswordHasher, UserStore};

use super::{error::ApiError, response::StatusResponse};

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "FName")]
    pub first_name: String,
    #[serde(rename = "LName")]
    pub last_name: String,
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H>(
    State((user_store, password_hasher)): State<(U, H)>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<StatusResponse>, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let use_case = RegisterUseCase::new(&user_store, &password_hasher);

    use_case
        .execute(
            request.first_name,
            request.last_name,
            Email::from(request.email),
            Password::from(request.password),
        )
        .await?;

    Ok(Json(StatusResponse::success()))
}
