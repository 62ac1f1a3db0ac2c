//! HTTP adapter for the PersonaForge API (reqwest)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::debug;

use personaforge_shared::ErrorBody;

use crate::ports::outbound::{ApiError, RawApiPort};

/// `RawApiPort` over plain HTTP
#[derive(Clone)]
pub struct HttpApiAdapter {
    client: Client,
    base_url: String,
}

impl HttpApiAdapter {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
            return Err(http_error(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

/// Map a non-success reply to `ApiError::HttpError`.
///
/// Uses the backend's `{"detail": ...}` when present, then the raw body, then
/// the status reason.
fn http_error(status: StatusCode, body: &str) -> ApiError {
    let detail = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.detail_text(),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };
    ApiError::HttpError {
        status: status.as_u16(),
        detail,
    }
}

#[async_trait]
impl RawApiPort for HttpApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!(%url, "GET");
        self.send(self.client.get(url)).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!(%url, "POST");
        self.send(self.client.post(url).json(body)).await
    }

    async fn post_empty_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!(%url, "POST");
        self.send(self.client.post(url)).await
    }
}
