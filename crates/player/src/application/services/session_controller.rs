//! Session controller - composition root for the chat screen
//!
//! Routes universe and character selection into session resets, and runs
//! each submit as begin-send, API call and resolve. The state lock is never
//! held across an API call, so selection changes and debug toggles go through
//! while a reply is outstanding.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info};

use personaforge_domain::{CharacterName, DomainError, UniverseName};

use super::character_catalog::{CharacterCatalog, CharacterInfo};
use super::conversation_session::{ConversationSession, Resolution};
use super::debug_trace::TraceCapture;
use crate::ports::outbound::{ApiError, ClockPort, PersonaApiPort};
use crate::session_types::{ChatMessage, SessionState};

/// What happened to a submitted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank text, no bound character, or a call already pending
    Ignored,
    /// The reply (or error entry) was appended
    Resolved(ChatMessage),
    /// The session was rebound or cleared before the reply arrived
    Discarded,
}

/// Point-in-time copy of everything the UI renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub universe: Option<UniverseName>,
    pub character: Option<CharacterName>,
    pub state: SessionState,
    pub messages: Vec<ChatMessage>,
    pub debug_enabled: bool,
    pub trace: Option<TraceCapture>,
}

struct ControllerState {
    universe: Option<UniverseName>,
    catalog: CharacterCatalog,
    /// Whether a fetch for `universe` has succeeded
    catalog_loaded: bool,
    session: ConversationSession,
}

pub struct SessionController {
    api: Arc<dyn PersonaApiPort>,
    clock: Arc<dyn ClockPort>,
    state: Mutex<ControllerState>,
}

impl SessionController {
    pub fn new(api: Arc<dyn PersonaApiPort>, clock: Arc<dyn ClockPort>, debug: bool) -> Self {
        Self {
            api,
            clock,
            state: Mutex::new(ControllerState {
                universe: None,
                catalog: CharacterCatalog::default(),
                catalog_loaded: false,
                session: ConversationSession::new(debug),
            }),
        }
    }

    pub async fn list_universes(&self) -> Result<Vec<String>, ApiError> {
        self.api.list_universes().await
    }

    /// Switch to `universe` and load its characters.
    ///
    /// Selecting the current universe again changes nothing, unless its
    /// catalog never loaded; then the fetch is retried and the session kept.
    /// Returns the number of characters in the catalog.
    pub async fn select_universe(&self, universe: UniverseName) -> Result<usize, ApiError> {
        {
            let mut state = self.state.lock().await;
            if state.universe.as_ref() == Some(&universe) {
                if state.catalog_loaded {
                    return Ok(state.catalog.len());
                }
                drop(state);
                info!(universe = %universe, "Retrying character fetch");
                return self.load_catalog(universe).await;
            }
            info!(universe = %universe, "Universe selected");
            state.universe = Some(universe.clone());
            state.catalog = CharacterCatalog::empty(Some(universe.clone()));
            state.catalog_loaded = false;
            state.session.reset(Some(universe.clone()));
        }
        self.load_catalog(universe).await
    }

    /// Re-fetch the catalog of the current universe, e.g. after creating a
    /// character. The bound session is left alone.
    pub async fn refresh_catalog(&self) -> Result<usize, ApiError> {
        let universe = self.state.lock().await.universe.clone();
        match universe {
            Some(universe) => self.load_catalog(universe).await,
            None => Ok(0),
        }
    }

    async fn load_catalog(&self, universe: UniverseName) -> Result<usize, ApiError> {
        let fetched = CharacterCatalog::fetch(self.api.as_ref(), &universe).await;

        let mut state = self.state.lock().await;
        if state.universe.as_ref() != Some(&universe) {
            debug!(universe = %universe, "Dropping catalog for a universe no longer selected");
            return Ok(state.catalog.len());
        }
        match fetched {
            Ok(catalog) => {
                let count = catalog.len();
                state.catalog = catalog;
                state.catalog_loaded = true;
                Ok(count)
            }
            Err(e) => {
                error!(universe = %universe, error = %e, "Failed to load characters");
                Err(e)
            }
        }
    }

    /// Bind the session to a character of the current catalog.
    ///
    /// An unknown name fails with `UnknownCharacter` and keeps the prior
    /// binding.
    pub async fn select_character(&self, name: &str) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        let state = &mut *state;
        let character = state.catalog.require(name)?;
        let universe = match &state.universe {
            Some(universe) => universe,
            None => return Err(DomainError::unknown_character("", name)),
        };
        state.session.bind(universe, character, self.clock.now());
        info!(universe = %universe, character = %character.name, "Character selected");
        Ok(())
    }

    /// Flip debug mode; returns the new value
    pub async fn toggle_debug(&self) -> bool {
        let mut state = self.state.lock().await;
        let enabled = !state.session.debug_enabled();
        state.session.set_debug_enabled(enabled);
        info!(enabled, "Debug mode toggled");
        enabled
    }

    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        let now = self.clock.now();
        state.session.clear(now);
    }

    /// Send `text` to the bound character and apply the outcome.
    ///
    /// Never fails: API errors become an error entry in the log.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let outbound = {
            let mut state = self.state.lock().await;
            if state.session.state() == SessionState::Pending {
                debug!("Submit ignored while a reply is pending");
                return SubmitOutcome::Ignored;
            }
            let now = self.clock.now();
            match state.session.begin_send(text, now) {
                Some(outbound) => outbound,
                None => return SubmitOutcome::Ignored,
            }
        };

        let request = outbound.request();
        info!(
            universe = %request.universe,
            character = %request.character_name,
            debug = request.debug,
            "Sending chat message"
        );
        let result = self.api.send_chat(request).await;
        if let Err(e) = &result {
            error!(character = %request.character_name, error = %e, "Chat request failed");
        }

        let mut state = self.state.lock().await;
        let now = self.clock.now();
        match state.session.resolve(outbound, result, now) {
            Resolution::Applied(message) => SubmitOutcome::Resolved(message),
            Resolution::Discarded => SubmitOutcome::Discarded,
        }
    }

    pub async fn state(&self) -> SessionState {
        self.state.lock().await.session.state()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock().await;
        let session = &state.session;
        SessionSnapshot {
            universe: state.universe.clone(),
            character: session.bound_character().cloned(),
            state: session.state(),
            messages: session.messages().to_vec(),
            debug_enabled: session.debug_enabled(),
            trace: session.debug_trace().cloned(),
        }
    }

    pub async fn catalog_names(&self) -> Vec<String> {
        self.state.lock().await.catalog.names()
    }

    pub async fn current_universe(&self) -> Option<UniverseName> {
        self.state.lock().await.universe.clone()
    }

    /// Panel data for the bound character, read from the catalog
    pub async fn character_info(&self) -> Option<CharacterInfo> {
        let state = self.state.lock().await;
        let name = state.session.bound_character()?;
        state
            .catalog
            .find(name.as_str())
            .map(CharacterInfo::from)
    }
}
