//! Character and universe wire shapes
//!
//! Moods travel as raw strings so that one malformed record can be rejected on
//! its own during conversion instead of failing a whole list response.

use serde::{Deserialize, Serialize};

use personaforge_domain::{
    Character, CharacterName, DomainError, Inventory, Mood, Role, UniverseName,
};

/// Mood as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodData {
    pub primary_emotion: String,
    pub intensity: String,
    #[serde(default)]
    pub plutchik_axis: Vec<String>,
}

impl From<&Mood> for MoodData {
    fn from(mood: &Mood) -> Self {
        Self {
            primary_emotion: mood.primary_emotion().to_string(),
            intensity: mood.intensity().to_string(),
            plutchik_axis: mood.axis().iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl TryFrom<&MoodData> for Mood {
    type Error = DomainError;

    fn try_from(data: &MoodData) -> Result<Self, Self::Error> {
        Mood::parse(&data.primary_emotion, &data.intensity, &data.plutchik_axis)
    }
}

/// Character record as listed by `GET /api/universes/{u}/characters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterData {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub universe: String,
    #[serde(default)]
    pub inventory: Vec<String>,
    pub current_mood: MoodData,
    #[serde(default)]
    pub backstory: String,
    #[serde(default)]
    pub location: String,
}

impl CharacterData {
    /// Validate into a domain character belonging to `universe`.
    ///
    /// The universe the catalog was fetched for wins over the record's own
    /// `universe` field, which older records leave empty.
    pub fn into_domain(self, universe: &UniverseName) -> Result<Character, DomainError> {
        let mood = Mood::try_from(&self.current_mood)?;
        let name = CharacterName::new(self.name)?;
        Ok(Character::new(universe.clone(), name, self.role)
            .with_location(self.location)
            .with_backstory(self.backstory)
            .with_inventory(Inventory::from_items(self.inventory))
            .with_mood(mood))
    }
}

impl From<&Character> for CharacterData {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name.to_string(),
            role: character.role.clone(),
            universe: character.universe.to_string(),
            inventory: character.inventory.items().to_vec(),
            current_mood: MoodData::from(&character.current_mood),
            backstory: character.backstory.clone(),
            location: character.location.clone(),
        }
    }
}

/// Role entry of a universe manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleData {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl From<RoleData> for Role {
    fn from(data: RoleData) -> Self {
        Role::new(data.name, data.description)
    }
}

impl From<&Role> for RoleData {
    fn from(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            description: role.description.clone(),
        }
    }
}
