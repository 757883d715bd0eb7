//! REST client for making requests to the storefront backend

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::OnceLock;

/// Backend used when `STOREFRONT_API_URL` was not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

static API_URL: OnceLock<String> = OnceLock::new();

/// Initialize the API URL. Call this at startup.
pub fn init_api_url(url: String) {
    API_URL.set(url).ok();
}

/// Get the configured API URL
pub fn get_api_url() -> &'static str {
    API_URL.get().map(|s| s.as_str()).unwrap_or(DEFAULT_API_URL)
}

/// Error type for REST operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Status { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}

/// Error payload shapes the backend uses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Best human-readable message for a failed response
fn error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error.or(body.message))
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}

/// REST client for making requests
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new REST client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        with_credentials(self.client.request(method, self.url(path)))
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn get_with_query<Q, R>(&self, path: &str, query: &Q) -> Result<R, ApiError>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    /// POST a body and ignore whatever the backend answers with
    pub async fn post_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::POST, path).json(body)).await
    }

    pub async fn post_multipart<R: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<R, ApiError> {
        self.send(self.request(Method::POST, path).multipart(form)).await
    }

    async fn send<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                message: error_message(status, &body),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await?;
            return Err(ApiError::Status {
                status,
                message: error_message(status, &body),
            });
        }

        Ok(())
    }
}

/// Send the session cookie with every browser request
#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

/// Create a client for the configured backend
pub fn api_client() -> ApiClient {
    ApiClient::new(get_api_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_error_field() {
        let body = br#"{"error":"Out of stock","message":"ignored"}"#;
        assert_eq!(error_message(StatusCode::BAD_REQUEST, body), "Out of stock");
    }

    #[test]
    fn falls_back_to_message_then_reason() {
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, br#"{"message":"Ad not found"}"#),
            "Ad not found"
        );
        assert_eq!(error_message(StatusCode::NOT_FOUND, b"<html>"), "Not Found");
    }

    #[test]
    fn joins_urls_without_double_slashes() {
        let client = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(client.url("/cart"), "http://localhost:5000/api/cart");
        assert_eq!(client.url("ad/1"), "http://localhost:5000/api/ad/1");
    }
}
