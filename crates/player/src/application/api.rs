//! Typed API wrapper over the object-safe `RawApiPort`
//!
//! Builds request paths, serializes bodies and decodes the JSON replies into
//! the wire DTOs from `personaforge-shared`.

use std::sync::Arc;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use personaforge_shared::{
    CharacterData, CharacterListResponse, ChatRequest, ChatResponse, CreateCharacterRequest,
    CreateUniverseRequest, HealthResponse, MessageResponse, UniverseListResponse,
    UniverseManifestData,
};

use crate::ports::outbound::{ApiError, PersonaApiPort, RawApiPort};

/// Characters that may not appear unescaped in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

fn universe_path(universe: &str) -> String {
    format!("api/universes/{}", segment(universe))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
}

fn encode<T: Serialize>(body: &T) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))
}

/// `PersonaApiPort` implemented on top of any `RawApiPort`
#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

#[async_trait]
impl PersonaApiPort for Api {
    async fn health(&self) -> Result<HealthResponse, ApiError> {
        decode(self.raw.get_json("api/health").await?)
    }

    async fn list_universes(&self) -> Result<Vec<String>, ApiError> {
        let response: UniverseListResponse = decode(self.raw.get_json("api/universes").await?)?;
        Ok(response.universes)
    }

    async fn get_universe(&self, universe: &str) -> Result<UniverseManifestData, ApiError> {
        decode(self.raw.get_json(&universe_path(universe)).await?)
    }

    async fn list_characters(&self, universe: &str) -> Result<Vec<CharacterData>, ApiError> {
        let path = format!("{}/characters", universe_path(universe));
        let response: CharacterListResponse = decode(self.raw.get_json(&path).await?)?;
        Ok(response.characters)
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let body = encode(request)?;
        decode(self.raw.post_json("api/chat", &body).await?)
    }

    async fn create_character(
        &self,
        universe: &str,
        request: &CreateCharacterRequest,
    ) -> Result<MessageResponse, ApiError> {
        let path = format!("{}/characters", universe_path(universe));
        let body = encode(request)?;
        decode(self.raw.post_json(&path, &body).await?)
    }

    async fn create_universe(
        &self,
        request: &CreateUniverseRequest,
    ) -> Result<MessageResponse, ApiError> {
        let body = encode(request)?;
        decode(self.raw.post_json("api/universes", &body).await?)
    }

    async fn build_index(&self, universe: &str) -> Result<MessageResponse, ApiError> {
        let path = format!("{}/build-index", universe_path(universe));
        decode(self.raw.post_empty_json(&path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use serde_json::json;

    fn api(raw: MockRawApiPort) -> Api {
        Api::new(Arc::new(raw))
    }

    #[test]
    fn test_segment_escapes_spaces_and_slashes() {
        assert_eq!(segment("Star Wars"), "Star%20Wars");
        assert_eq!(segment("a/b"), "a%2Fb");
        assert_eq!(segment("Eldoria"), "Eldoria");
    }

    #[tokio::test]
    async fn test_list_universes_unwraps_envelope() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == "api/universes")
            .times(1)
            .returning(|_| Ok(json!({"universes": ["Eldoria", "Star Wars"]})));

        let universes = api(raw).list_universes().await.expect("universes");
        assert_eq!(universes, vec!["Eldoria", "Star Wars"]);
    }

    #[tokio::test]
    async fn test_list_characters_encodes_universe() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == "api/universes/Star%20Wars/characters")
            .times(1)
            .returning(|_| Ok(json!({"characters": []})));

        let characters = api(raw).list_characters("Star Wars").await.expect("list");
        assert!(characters.is_empty());
    }

    #[tokio::test]
    async fn test_send_chat_posts_request_body() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| {
                path == "api/chat"
                    && body["query"] == "Hello"
                    && body["character_name"] == "Aria"
                    && body["debug"] == false
            })
            .times(1)
            .returning(|_, _| Ok(json!({"response": "Greetings!", "character": "Aria"})));

        let reply = api(raw)
            .send_chat(&ChatRequest {
                query: "Hello".into(),
                universe: "Eldoria".into(),
                character_name: "Aria".into(),
                debug: false,
            })
            .await
            .expect("reply");
        assert_eq!(reply.response, "Greetings!");
        assert_eq!(reply.character, "Aria");
    }

    #[tokio::test]
    async fn test_build_index_posts_without_body() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_empty_json()
            .withf(|path| path == "api/universes/Eldoria/build-index")
            .times(1)
            .returning(|_| Ok(json!({"message": "Index built"})));

        let reply = api(raw).build_index("Eldoria").await.expect("build");
        assert_eq!(reply.message, "Index built");
    }

    #[tokio::test]
    async fn test_malformed_reply_is_parse_error() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .returning(|_| Ok(json!({"unexpected": true})));

        let err = api(raw).list_universes().await.expect_err("parse error");
        assert!(matches!(err, ApiError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_transport_errors_pass_through() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json().returning(|_| {
            Err(ApiError::HttpError {
                status: 404,
                detail: "Universe 'Nope' not found".into(),
            })
        });

        let err = api(raw).get_universe("Nope").await.expect_err("404");
        assert_eq!(err.detail(), "Universe 'Nope' not found");
    }
}
