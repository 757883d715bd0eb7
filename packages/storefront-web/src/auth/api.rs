//! Account endpoints

use storefront_access::ProfilePayload;

use crate::api::{api_client, ApiError};
use crate::types::{SignInRequest, SignUpRequest};

/// Profile of the current session, `None` when the backend does not know us
pub async fn fetch_profile() -> Result<Option<ProfilePayload>, ApiError> {
    match api_client().get::<ProfilePayload>("profile").await {
        Ok(profile) => Ok(Some(profile)),
        Err(e) if e.is_unauthorized() => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn sign_in(request: &SignInRequest) -> Result<ProfilePayload, ApiError> {
    api_client().post("signin", request).await
}

pub async fn sign_up(request: &SignUpRequest) -> Result<ProfilePayload, ApiError> {
    api_client().post("signup", request).await
}

pub async fn logout() -> Result<(), ApiError> {
    api_client().post_unit("logout", &serde_json::json!({})).await
}
