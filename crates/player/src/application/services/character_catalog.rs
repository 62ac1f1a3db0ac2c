//! Character catalog - read-only view of one universe's characters

use tracing::{info, warn};

use personaforge_domain::{Character, DomainError, UniverseName};
use personaforge_shared::CharacterData;

use crate::ports::outbound::{ApiError, PersonaApiPort};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterCatalog {
    universe: Option<UniverseName>,
    characters: Vec<Character>,
}

impl CharacterCatalog {
    /// An empty catalog, optionally already scoped to a universe
    pub fn empty(universe: Option<UniverseName>) -> Self {
        Self {
            universe,
            characters: Vec::new(),
        }
    }

    pub fn from_characters(universe: UniverseName, characters: Vec<Character>) -> Self {
        Self {
            universe: Some(universe),
            characters,
        }
    }

    /// Validate wire records, skipping (and logging) the ones that fail
    pub fn from_wire(universe: UniverseName, records: Vec<CharacterData>) -> Self {
        let characters = records
            .into_iter()
            .filter_map(|record| {
                let name = record.name.clone();
                match record.into_domain(&universe) {
                    Ok(character) => Some(character),
                    Err(e) => {
                        warn!(
                            universe = %universe,
                            character = %name,
                            error = %e,
                            "Skipping invalid character"
                        );
                        None
                    }
                }
            })
            .collect();
        Self::from_characters(universe, characters)
    }

    /// Fetch and validate the characters of `universe`
    pub async fn fetch(
        api: &dyn PersonaApiPort,
        universe: &UniverseName,
    ) -> Result<Self, ApiError> {
        let records = api.list_characters(universe.as_str()).await?;
        let catalog = Self::from_wire(universe.clone(), records);
        info!(universe = %universe, count = catalog.len(), "Loaded character catalog");
        Ok(catalog)
    }

    pub fn universe(&self) -> Option<&UniverseName> {
        self.universe.as_ref()
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn names(&self) -> Vec<String> {
        self.characters.iter().map(|c| c.name.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Exact-name lookup
    pub fn find(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == *name)
    }

    /// Like [`find`](Self::find) but failing with `UnknownCharacter`
    pub fn require(&self, name: &str) -> Result<&Character, DomainError> {
        self.find(name).ok_or_else(|| {
            let universe = self
                .universe
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            DomainError::unknown_character(universe, name)
        })
    }
}

/// Read-only character panel contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterInfo {
    pub name: String,
    pub role: String,
    pub location: String,
    /// e.g. `"joy (moderate)"`
    pub mood: String,
    /// Axis emotions joined with `", "`
    pub axis: String,
    /// Items joined with `", "`
    pub inventory: String,
    pub backstory: String,
}

impl From<&Character> for CharacterInfo {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name.to_string(),
            role: character.role.clone(),
            location: character.location.clone(),
            mood: character.current_mood.label(),
            axis: character.current_mood.axis().joined(),
            inventory: character.inventory.joined(),
            backstory: character.backstory.clone(),
        }
    }
}
