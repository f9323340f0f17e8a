//! HTTP client for the Vallunex backend.
//!
//! One base URL, token passed as a bearer header when a session exists.
//! Modules mirror the backend's resource routes:
//! - auth: `POST /auth/login`
//! - employees, tasks, leads, projects, products: CRUD + status actions
//!
//! Requests are issued once: no retry, no backoff, no timeout. A network
//! failure surfaces to the caller as an error and the operation is aborted;
//! nothing is rolled back because local state only changes after a response.

pub mod auth;
pub mod employees;
pub mod leads;
pub mod products;
pub mod projects;
pub mod tasks;

use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// Production backend. Overridable through `VALLUNEX_API_BASE_URL`.
pub const DEFAULT_BASE_URL: &str =
    "https://vallunex-company-app-backend-production.up.railway.app/api";

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Client against the configured base URL (env override, else production).
    pub fn new() -> Self {
        let base = std::env::var("VALLUNEX_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(&base)
    }

    pub fn with_base_url(base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        }
    }

    /// Install or clear the bearer token. Set on login/restore, cleared on
    /// logout.
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn with_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.read().ok().and_then(|guard| guard.clone()) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn handle<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_body(status.as_u16(), &body));
        }
        Ok(response.json::<T>().await?)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .with_auth(self.http.get(self.endpoint(path)))
            .send()
            .await?;
        self.handle(response).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .with_auth(self.http.post(self.endpoint(path)).json(body))
            .send()
            .await?;
        self.handle(response).await
    }

    /// POST with no payload (batch actions like payroll approve-all).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .with_auth(self.http.post(self.endpoint(path)))
            .send()
            .await?;
        self.handle(response).await
    }

    pub async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .with_auth(self.http.patch(self.endpoint(path)).json(body))
            .send()
            .await?;
        self.handle(response).await
    }

    /// PATCH with no payload (dedicated status-transition endpoints).
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .with_auth(self.http.patch(self.endpoint(path)))
            .send()
            .await?;
        self.handle(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .with_auth(self.http.delete(self.endpoint(path)))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_body(status.as_u16(), &body));
        }
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Failure bodies optionally carry `{ "error": string }`; pull that string
/// out when present so it can reach the user verbatim.
fn error_from_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_default();
    ApiError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let api = ApiClient::with_base_url("https://api.example.com/api/");
        assert_eq!(
            api.endpoint("/employees"),
            "https://api.example.com/api/employees"
        );
        assert_eq!(
            api.endpoint("tasks/t1/submit"),
            "https://api.example.com/api/tasks/t1/submit"
        );
    }

    #[test]
    fn test_error_body_with_error_field() {
        let err = error_from_body(401, r#"{"error":"Invalid credentials"}"#);
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_body_without_error_field() {
        let err = error_from_body(500, "upstream exploded");
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 500);
                assert!(message.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_token_install_and_clear() {
        let api = ApiClient::with_base_url("https://api.example.com");
        api.set_token(Some("tok-1".to_string()));
        assert_eq!(api.token.read().unwrap().as_deref(), Some("tok-1"));
        api.set_token(None);
        assert!(api.token.read().unwrap().is_none());
    }
}
