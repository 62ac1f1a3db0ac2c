//! PersonaForge Domain - characters, moods and universes.
//!
//! Pure types with invariants enforced at construction. No I/O.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{Character, Role, Universe};
pub use error::DomainError;
pub use value_objects::{
    CharacterName, Emotion, EmotionAxis, Intensity, Inventory, Mood, UniverseName,
};
