//! Value objects - Immutable objects defined by their attributes

mod inventory;
mod mood;
mod names;

pub use inventory::Inventory;
pub use mood::{Emotion, EmotionAxis, Intensity, Mood};
pub use names::{CharacterName, UniverseName};
