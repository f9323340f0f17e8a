//! Login endpoint. Success returns the identity with its session token;
//! failure returns a non-2xx with an optional `{ "error" }` body that the
//! login screen shows verbatim.

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::types::Identity;

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<Identity, ApiError> {
    api.post_json("auth/login", &LoginRequest { email, password })
        .await
}
