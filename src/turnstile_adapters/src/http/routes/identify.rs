use axum::{Extension, Json};

use crate::http::middleware::Identity;

use super::response::IdentityResponse;

/// Name of the caller, as vouched for by `verify_user`
#[tracing::instrument(name = "Identify", skip_all)]
pub async fn identify(Extension(identity): Extension<Identity>) -> Json<IdentityResponse> {
    Json(IdentityResponse::success(identity.name.as_str()))
}
