//! Application services
//!
//! The conversation core (`conversation_session`, `debug_trace`,
//! `character_catalog`, `session_controller`) plus the management use cases
//! for characters and universes. Services depend on port traits, not concrete
//! infrastructure implementations.

pub mod character_catalog;
pub mod character_service;
pub mod conversation_session;
pub mod debug_trace;
pub mod session_controller;
pub mod universe_service;

pub use character_catalog::{CharacterCatalog, CharacterInfo};
pub use character_service::{CharacterDraft, CharacterService};
pub use conversation_session::{ConversationSession, OutboundChat, Resolution, CHAT_ERROR_PREFIX};
pub use debug_trace::{DebugTrace, TraceCapture, TraceCharacterInfo};
pub use session_controller::{SessionController, SessionSnapshot, SubmitOutcome};
pub use universe_service::{UniverseDraft, UniverseService};
