use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use turnstile_application::AuthenticateUseCase;
use turnstile_core::{DisplayName, SessionTokenCodec};

use crate::auth::extract_token;
use crate::http::{routes::ApiError, state::SessionState};

/// Caller identity established from the session cookie.
#[derive(Debug, Clone)]
pub struct Identity {
    pub name: DisplayName,
}

/// Gate for identity-dependent routes.
///
/// Rejects the request with a JSON error when the session cookie is missing
/// or fails verification; otherwise stores the caller's [`Identity`] in the
/// request extensions and runs the inner handler.
pub async fn verify_user<C>(
    State(session): State<SessionState<C>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    C: SessionTokenCodec + Clone + 'static,
{
    let token = extract_token(&jar, &session.cookie_name);
    let name = AuthenticateUseCase::new(&session.codec).execute(token)?;

    request.extensions_mut().insert(Identity { name });

    Ok(next.run(request).await)
}
