//! Raw API Port - Object-safe HTTP boundary
//!
//! `RawApiPort` moves untyped JSON so that adapters stay free of wire DTOs and
//! can be stored behind `Arc<dyn ...>`. The application layer provides a typed
//! wrapper that implements `PersonaApiPort` on top.
//!
//! Paths are relative to the API base URL (e.g. `api/universes`) and must
//! already be percent-encoded.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// POST without a request body, returning the JSON reply
    async fn post_empty_json(&self, path: &str) -> Result<Value, ApiError>;
}
