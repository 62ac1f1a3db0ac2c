//! Response bodies returned by the PersonaForge API
//!
//! All response types ignore unknown keys so the backend can grow its payloads
//! without breaking older clients.

use serde::{Deserialize, Serialize};

use crate::character::{CharacterData, RoleData};

/// `GET /api/universes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseListResponse {
    pub universes: Vec<String>,
}

/// `GET /api/universes/{u}/characters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterListResponse {
    pub characters: Vec<CharacterData>,
}

/// `GET /api/universes/{u}` - the universe manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseManifestData {
    pub universe_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub roles: Vec<RoleData>,
}

/// Generic `{"message": ...}` acknowledgement (create, build-index)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// FastAPI error body: `{"detail": ...}`
///
/// `detail` is usually a string but validation errors send a list; keep the
/// raw value and render it on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Human-readable detail text
    pub fn detail_text(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Character summary inside the debug info
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceCharacterInfoData {
    pub name: String,
    pub role: String,
    /// Long-form mood description the prompt was built with
    pub mood: String,
    #[serde(default)]
    pub location: String,
}

/// Retrieval/prompt details attached to a chat reply when `debug` was requested
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugInfoData {
    #[serde(default)]
    pub character_info: Option<TraceCharacterInfoData>,
    #[serde(default)]
    pub retrieved_context: Vec<String>,
    #[serde(default)]
    pub full_prompt: Option<String>,
}

/// `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated reply text
    pub response: String,
    /// Label of the replying character
    pub character: String,
    #[serde(default)]
    pub universe: Option<String>,
    #[serde(default)]
    pub debug_info: Option<DebugInfoData>,
}
