//! Simple test fixtures used across unit tests.

use chrono::{DateTime, TimeZone, Utc};

use personaforge_domain::{
    Character, CharacterName, Emotion, Intensity, Inventory, Mood, UniverseName,
};
use personaforge_shared::{CharacterData, ChatResponse, MoodData};

use crate::ports::outbound::{ApiError, ClockPort};

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

/// Fixed instant `secs` seconds after a reference time
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0)
        .single()
        .expect("valid timestamp")
}

pub fn eldoria() -> UniverseName {
    UniverseName::new("Eldoria").expect("valid universe")
}

pub fn aria() -> Character {
    Character::new(
        eldoria(),
        CharacterName::new("Aria").expect("valid name"),
        "Healer",
    )
    .with_location("Silverbrook")
    .with_backstory("Raised by the river temple.")
    .with_inventory(Inventory::from_items(["herbal pouch", "silver amulet"]))
    .with_mood(Mood::new(Emotion::Joy, Intensity::Moderate))
}

pub fn bram() -> Character {
    Character::new(
        eldoria(),
        CharacterName::new("Bram").expect("valid name"),
        "Blacksmith",
    )
    .with_location("Ironhold")
    .with_mood(Mood::new(Emotion::Anger, Intensity::High))
}

pub fn character_data(name: &str, role: &str, primary_emotion: &str) -> CharacterData {
    CharacterData {
        name: name.into(),
        role: role.into(),
        universe: "Eldoria".into(),
        inventory: Vec::new(),
        current_mood: MoodData {
            primary_emotion: primary_emotion.into(),
            intensity: "moderate".into(),
            plutchik_axis: vec![primary_emotion.into()],
        },
        backstory: String::new(),
        location: String::new(),
    }
}

pub fn chat_reply(text: &str, label: &str) -> ChatResponse {
    ChatResponse {
        response: text.into(),
        character: label.into(),
        universe: Some("Eldoria".into()),
        debug_info: None,
    }
}

/// Clock frozen at [`at`]`(0)`
pub struct FixedClock;

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        at(0)
    }
}
