//! Debug trace - retrieval and prompt details of the latest assistant turn
//!
//! A trace is captured wholesale from the chat reply's `debug_info` and never
//! patched field by field.

use personaforge_shared::{DebugInfoData, TraceCharacterInfoData};

/// Character summary the backend built its prompt from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceCharacterInfo {
    pub name: String,
    pub role: String,
    pub mood: String,
    pub location: String,
}

impl From<TraceCharacterInfoData> for TraceCharacterInfo {
    fn from(data: TraceCharacterInfoData) -> Self {
        Self {
            name: data.name,
            role: data.role,
            mood: data.mood,
            location: data.location,
        }
    }
}

/// One captured trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceCapture {
    pub character_info: TraceCharacterInfo,
    pub retrieved_context: Vec<String>,
    pub full_prompt: String,
}

impl TraceCapture {
    /// Build a capture from a reply's debug payload.
    ///
    /// Returns `None` unless both the character info and the prompt are
    /// present; a partial payload is not a trace.
    pub fn from_debug_info(data: DebugInfoData) -> Option<Self> {
        let character_info = data.character_info?;
        let full_prompt = data.full_prompt?;
        Some(Self {
            character_info: character_info.into(),
            retrieved_context: data.retrieved_context,
            full_prompt,
        })
    }
}

/// Holder for the latest trace, absent until something is captured
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugTrace {
    capture: Option<TraceCapture>,
}

impl DebugTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever was held with `capture`
    pub fn capture(
        &mut self,
        character_info: TraceCharacterInfo,
        retrieved_context: Vec<String>,
        full_prompt: impl Into<String>,
    ) {
        self.replace(TraceCapture {
            character_info,
            retrieved_context,
            full_prompt: full_prompt.into(),
        });
    }

    pub fn replace(&mut self, capture: TraceCapture) {
        self.capture = Some(capture);
    }

    pub fn clear(&mut self) {
        self.capture = None;
    }

    pub fn current(&self) -> Option<&TraceCapture> {
        self.capture.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.capture.is_none()
    }
}
