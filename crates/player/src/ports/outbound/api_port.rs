//! Typed API port for the PersonaForge backend

use async_trait::async_trait;

use personaforge_shared::{
    CharacterData, ChatRequest, ChatResponse, CreateCharacterRequest, CreateUniverseRequest,
    HealthResponse, MessageResponse, UniverseManifestData,
};

/// Errors that can occur when calling the API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP {status}: {detail}")]
    HttpError { status: u16, detail: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Failed to serialize request: {0}")]
    SerializeError(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Human-readable detail suitable for the chat log.
    ///
    /// HTTP errors carry the backend's `detail` verbatim; everything else uses
    /// its display text.
    pub fn detail(&self) -> String {
        match self {
            ApiError::HttpError { detail, .. } => detail.clone(),
            ApiError::RequestFailed(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Operations the client consumes from the PersonaForge API.
///
/// Universe identifiers are passed raw; implementations take care of
/// encoding them into request paths.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PersonaApiPort: Send + Sync {
    async fn health(&self) -> Result<HealthResponse, ApiError>;

    async fn list_universes(&self) -> Result<Vec<String>, ApiError>;

    async fn get_universe(&self, universe: &str) -> Result<UniverseManifestData, ApiError>;

    async fn list_characters(&self, universe: &str) -> Result<Vec<CharacterData>, ApiError>;

    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError>;

    async fn create_character(
        &self,
        universe: &str,
        request: &CreateCharacterRequest,
    ) -> Result<MessageResponse, ApiError>;

    async fn create_universe(
        &self,
        request: &CreateUniverseRequest,
    ) -> Result<MessageResponse, ApiError>;

    async fn build_index(&self, universe: &str) -> Result<MessageResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_detail_is_backend_text() {
        let err = ApiError::HttpError {
            status: 404,
            detail: "Character 'Bram' not found".into(),
        };
        assert_eq!(err.detail(), "Character 'Bram' not found");
        assert_eq!(err.to_string(), "HTTP 404: Character 'Bram' not found");
    }

    #[test]
    fn test_other_errors_use_display_text() {
        assert_eq!(
            ApiError::RequestFailed("connection refused".into()).detail(),
            "connection refused"
        );
        assert_eq!(
            ApiError::ParseError("expected value".into()).detail(),
            "Failed to parse response: expected value"
        );
    }
}
