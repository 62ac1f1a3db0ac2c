//! Character entity - a persona living in a universe
//!
//! Characters are owned by the backend; the client holds read-only snapshots
//! fetched through the catalog. A character's `Mood` belongs to it alone: a
//! conversation copies what it needs at bind time and never writes back.

use serde::{Deserialize, Serialize};

use crate::value_objects::{CharacterName, Inventory, Mood, UniverseName};

/// A character in a universe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: CharacterName,
    pub role: String,
    pub universe: UniverseName,
    pub location: String,
    pub backstory: String,
    pub inventory: Inventory,
    pub current_mood: Mood,
}

impl Character {
    pub fn new(universe: UniverseName, name: CharacterName, role: impl Into<String>) -> Self {
        Self {
            name,
            role: role.into(),
            universe,
            location: String::new(),
            backstory: String::new(),
            inventory: Inventory::new(),
            current_mood: Mood::default(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = backstory.into();
        self
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.current_mood = mood;
        self
    }

    /// Long-form mood description, as fed into generation prompts
    pub fn describe_mood(&self) -> String {
        format!(
            "Primary emotion: {}, Intensity: {}, Plutchik axis: {}",
            self.current_mood.primary_emotion(),
            self.current_mood.intensity(),
            self.current_mood.axis().joined()
        )
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} the {} at {}", self.name, self.role, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{Emotion, Intensity};

    fn aria() -> Character {
        Character::new(
            UniverseName::new("Eldoria").expect("valid"),
            CharacterName::new("Aria").expect("valid"),
            "Healer",
        )
        .with_location("Silverbrook")
        .with_mood(Mood::from_parts(
            Emotion::Joy,
            Intensity::Moderate,
            [Emotion::Joy, Emotion::Trust],
        ))
    }

    #[test]
    fn test_describe_mood() {
        assert_eq!(
            aria().describe_mood(),
            "Primary emotion: joy, Intensity: moderate, Plutchik axis: joy, trust"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(aria().to_string(), "Aria the Healer at Silverbrook");
    }
}
