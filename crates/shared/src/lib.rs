//! PersonaForge Protocol - Shared types for the HTTP API boundary
//!
//! This crate contains the wire-format DTOs exchanged with the PersonaForge API:
//! - Request bodies (chat, character and universe creation)
//! - Response envelopes (lists, manifests, chat replies with debug info)
//! - Conversions from wire DTOs into validated domain types
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain crate
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Lenient reads** - unknown response keys are ignored

pub mod character;
pub mod requests;
pub mod responses;

pub use character::{CharacterData, MoodData, RoleData};
pub use requests::{ChatRequest, CreateCharacterRequest, CreateUniverseRequest};
pub use responses::{
    CharacterListResponse, ChatResponse, DebugInfoData, ErrorBody, HealthResponse,
    MessageResponse, TraceCharacterInfoData, UniverseListResponse, UniverseManifestData,
};
