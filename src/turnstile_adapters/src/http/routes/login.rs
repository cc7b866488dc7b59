use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;
use turnstile_application::LoginUseCase;
use turnstile_core::{Email, Password, PasswordHasher, SessionTokenCodec, UserStore};

use crate::auth::create_session_cookie;
use crate::http::state::SessionState;

use super::{error::ApiError, response::StatusResponse};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H, C>(
    State((user_store, password_hasher, session)): State<(U, H, SessionState<C>)>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<StatusResponse>), ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    C: SessionTokenCodec + Clone + 'static,
{
    let use_case = LoginUseCase::new(&user_store, &password_hasher, &session.codec);

    let response = use_case
        .execute(Email::from(request.email), Password::from(request.password))
        .await?;

    let jar = jar.add(create_session_cookie(&response.token, &session.cookie_name));

    Ok((jar, Json(StatusResponse::success())))
}
