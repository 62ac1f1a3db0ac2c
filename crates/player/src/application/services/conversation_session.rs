//! Conversation session - the chat state machine for one (universe, character) pairing
//!
//! The session is synchronous and owns no I/O. A send is split in two:
//! [`ConversationSession::begin_send`] appends the user entry and hands back an
//! [`OutboundChat`] ticket; the caller performs the API call and passes the
//! outcome to [`ConversationSession::resolve`].
//!
//! Every bind, clear or reset starts a new epoch. A ticket from an older epoch
//! is discarded on resolution, so a reply can never land in the log of a
//! character other than the one it was sent to.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use personaforge_domain::{Character, CharacterName, Mood, UniverseName};
use personaforge_shared::{ChatRequest, ChatResponse};

use super::debug_trace::{DebugTrace, TraceCapture};
use crate::ports::outbound::ApiError;
use crate::session_types::{ChatMessage, SessionState};

/// Prefix of the log entry written for a failed chat call
pub const CHAT_ERROR_PREFIX: &str = "Sorry, there was an error processing your message: ";

/// What the session remembers of its character, read once at bind time.
///
/// Later edits to the catalog entry never reach an active session.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BoundCharacter {
    name: CharacterName,
    role: String,
    mood: Mood,
}

impl BoundCharacter {
    fn snapshot(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            role: character.role.clone(),
            mood: character.current_mood.clone(),
        }
    }

    fn summary(&self, universe: &UniverseName) -> String {
        format!(
            "{}, a {} from {}. Current mood: {}",
            self.name,
            self.role,
            universe,
            self.mood.label()
        )
    }
}

/// Ticket for one outstanding chat call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundChat {
    epoch: u64,
    character: CharacterName,
    request: ChatRequest,
}

impl OutboundChat {
    /// Body to send to `POST /api/chat`
    pub fn request(&self) -> &ChatRequest {
        &self.request
    }
}

/// Result of handing an outcome back to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome was appended; carries the new log entry
    Applied(ChatMessage),
    /// The session moved on since the call was issued
    Discarded,
}

#[derive(Debug, Clone)]
pub struct ConversationSession {
    universe: Option<UniverseName>,
    bound: Option<BoundCharacter>,
    messages: Vec<ChatMessage>,
    /// Epoch of the outstanding call, if any
    in_flight: Option<u64>,
    epoch: u64,
    debug_enabled: bool,
    trace: DebugTrace,
}

impl ConversationSession {
    pub fn new(debug_enabled: bool) -> Self {
        Self {
            universe: None,
            bound: None,
            messages: Vec::new(),
            in_flight: None,
            epoch: 0,
            debug_enabled,
            trace: DebugTrace::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        match (&self.bound, self.in_flight) {
            (None, _) => SessionState::Idle,
            (Some(_), None) => SessionState::Ready,
            (Some(_), Some(_)) => SessionState::Pending,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn universe(&self) -> Option<&UniverseName> {
        self.universe.as_ref()
    }

    pub fn bound_character(&self) -> Option<&CharacterName> {
        self.bound.as_ref().map(|b| &b.name)
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    /// The latest trace; hidden while debug is off
    pub fn debug_trace(&self) -> Option<&TraceCapture> {
        if self.debug_enabled {
            self.trace.current()
        } else {
            None
        }
    }

    /// Unbind and empty the log, e.g. after a universe change
    pub fn reset(&mut self, universe: Option<UniverseName>) {
        self.start_epoch();
        self.universe = universe;
        self.bound = None;
        self.messages = Vec::new();
    }

    /// Bind to `character` and restart the log with its summary
    pub fn bind(&mut self, universe: &UniverseName, character: &Character, now: DateTime<Utc>) {
        self.start_epoch();
        self.universe = Some(universe.clone());
        let bound = BoundCharacter::snapshot(character);
        self.messages = vec![ChatMessage::system(bound.summary(universe), now)];
        debug!(universe = %universe, character = %bound.name, "Session bound");
        self.bound = Some(bound);
    }

    /// Rebind to the same character, or empty the log when unbound
    pub fn clear(&mut self, now: DateTime<Utc>) {
        self.start_epoch();
        self.messages = match (&self.bound, &self.universe) {
            (Some(bound), Some(universe)) => {
                vec![ChatMessage::system(bound.summary(universe), now)]
            }
            _ => Vec::new(),
        };
    }

    /// Flip debug capture; either direction drops the current trace
    pub fn set_debug_enabled(&mut self, enabled: bool) {
        self.debug_enabled = enabled;
        self.trace.clear();
    }

    /// Start a send.
    ///
    /// Returns `None` (and changes nothing) unless the session is `Ready` and
    /// `text` has non-whitespace content.
    pub fn begin_send(&mut self, text: &str, now: DateTime<Utc>) -> Option<OutboundChat> {
        if self.state() != SessionState::Ready || text.trim().is_empty() {
            debug!(state = %self.state(), "Send ignored");
            return None;
        }
        let bound = self.bound.as_ref()?;
        let universe = self.universe.as_ref()?;

        let outbound = OutboundChat {
            epoch: self.epoch,
            character: bound.name.clone(),
            request: ChatRequest {
                query: text.to_string(),
                universe: universe.to_string(),
                character_name: bound.name.to_string(),
                debug: self.debug_enabled,
            },
        };
        self.messages.push(ChatMessage::user(text, now));
        self.in_flight = Some(self.epoch);
        Some(outbound)
    }

    /// Apply the outcome of the call `outbound` was issued for
    pub fn resolve(
        &mut self,
        outbound: OutboundChat,
        outcome: Result<ChatResponse, ApiError>,
        now: DateTime<Utc>,
    ) -> Resolution {
        let current = self.bound.as_ref().map(|b| &b.name);
        if self.in_flight != Some(outbound.epoch) || current != Some(&outbound.character) {
            debug!(
                character = %outbound.character,
                "Discarding chat outcome for a superseded session"
            );
            return Resolution::Discarded;
        }
        self.in_flight = None;

        let message = match outcome {
            Ok(reply) => {
                if outbound.request.debug && self.debug_enabled {
                    match reply.debug_info.and_then(TraceCapture::from_debug_info) {
                        Some(capture) => self.trace.replace(capture),
                        None => {
                            warn!(
                                character = %outbound.character,
                                "Debug requested but reply carried no trace"
                            );
                            self.trace.clear();
                        }
                    }
                }
                ChatMessage::assistant(reply.response, reply.character, now)
            }
            Err(e) => ChatMessage::error(format!("{CHAT_ERROR_PREFIX}{}", e.detail()), now),
        };
        self.messages.push(message.clone());
        Resolution::Applied(message)
    }

    fn start_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.in_flight = None;
        self.trace.clear();
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new(false)
    }
}
