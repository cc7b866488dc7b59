use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use turnstile_core::SessionTokenCodec;

use crate::auth::create_removal_cookie;
use crate::http::state::SessionState;

use super::response::StatusResponse;

/// Tell the client to drop its session cookie.
///
/// The token itself is not revoked: whoever still holds it can keep using
/// it until it expires.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<C>(
    State(session): State<SessionState<C>>,
    jar: CookieJar,
) -> (CookieJar, Json<StatusResponse>)
where
    C: SessionTokenCodec + Clone + 'static,
{
    let jar = jar.add(create_removal_cookie(&session.cookie_name));

    (jar, Json(StatusResponse::success()))
}
