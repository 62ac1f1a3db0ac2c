//! Request bodies sent to the PersonaForge API

use serde::{Deserialize, Serialize};

use crate::character::{MoodData, RoleData};

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message
    pub query: String,
    pub universe: String,
    pub character_name: String,
    /// Ask the backend to return retrieval/prompt debug info
    #[serde(default)]
    pub debug: bool,
}

/// Body of `POST /api/universes/{u}/characters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCharacterRequest {
    pub name: String,
    pub role: String,
    pub universe: String,
    pub inventory: Vec<String>,
    pub current_mood: MoodData,
    pub backstory: String,
    pub location: String,
}

/// Body of `POST /api/universes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUniverseRequest {
    pub universe_name: String,
    pub description: String,
    pub roles: Vec<RoleData>,
}
