//! Character Service - character creation for the management screens
//!
//! Form state lives in a [`CharacterDraft`]: a plain value with pure edit
//! operations, each returning a new draft. Validation happens once, when the
//! draft is turned into a create request.

use std::sync::Arc;

use tracing::info;

use personaforge_domain::{CharacterName, DomainError, Inventory, Mood, Role, UniverseName};
use personaforge_shared::{CharacterData, CreateCharacterRequest, MoodData};

use crate::application::ServiceError;
use crate::ports::outbound::PersonaApiPort;

/// Editable character form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDraft {
    pub name: String,
    pub role: String,
    /// Raw inventory slots; blanks are allowed while editing
    pub inventory: Vec<String>,
    pub mood: Mood,
    pub backstory: String,
    pub location: String,
}

impl Default for CharacterDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: String::new(),
            inventory: vec![String::new()],
            mood: Mood::default(),
            backstory: String::new(),
            location: String::new(),
        }
    }
}

impl CharacterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an exported character record
    pub fn from_data(data: CharacterData) -> Result<Self, DomainError> {
        let mood = Mood::try_from(&data.current_mood)?;
        Ok(Self {
            name: data.name,
            role: data.role,
            inventory: data.inventory,
            mood,
            backstory: data.backstory,
            location: data.location,
        })
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_role(&self, role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            ..self.clone()
        }
    }

    pub fn with_location(&self, location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..self.clone()
        }
    }

    pub fn with_backstory(&self, backstory: impl Into<String>) -> Self {
        Self {
            backstory: backstory.into(),
            ..self.clone()
        }
    }

    pub fn with_mood(&self, mood: Mood) -> Self {
        Self {
            mood,
            ..self.clone()
        }
    }

    /// Append an empty inventory slot
    pub fn with_inventory_slot(&self) -> Self {
        let mut inventory = self.inventory.clone();
        inventory.push(String::new());
        Self {
            inventory,
            ..self.clone()
        }
    }

    /// Set the item in slot `index`; out-of-range indexes change nothing
    pub fn with_inventory_item(&self, index: usize, item: impl Into<String>) -> Self {
        let mut inventory = self.inventory.clone();
        if let Some(slot) = inventory.get_mut(index) {
            *slot = item.into();
        }
        Self {
            inventory,
            ..self.clone()
        }
    }

    /// Drop slot `index`; out-of-range indexes change nothing
    pub fn without_inventory_slot(&self, index: usize) -> Self {
        let mut inventory = self.inventory.clone();
        if index < inventory.len() {
            inventory.remove(index);
        }
        Self {
            inventory,
            ..self.clone()
        }
    }

    /// Validate and build the create request for `universe`.
    ///
    /// Blank inventory slots are dropped here.
    pub fn to_request(
        &self,
        universe: &UniverseName,
    ) -> Result<CreateCharacterRequest, DomainError> {
        let name = CharacterName::new(self.name.as_str())?;
        let role = self.role.trim();
        if role.is_empty() {
            return Err(DomainError::validation("Character role cannot be empty"));
        }
        let inventory = Inventory::from_items(&self.inventory);

        Ok(CreateCharacterRequest {
            name: name.to_string(),
            role: role.to_string(),
            universe: universe.to_string(),
            inventory: inventory.into(),
            current_mood: MoodData::from(&self.mood),
            backstory: self.backstory.trim().to_string(),
            location: self.location.trim().to_string(),
        })
    }
}

/// Character service for the creation form
#[derive(Clone)]
pub struct CharacterService {
    api: Arc<dyn PersonaApiPort>,
}

impl CharacterService {
    pub fn new(api: Arc<dyn PersonaApiPort>) -> Self {
        Self { api }
    }

    /// Roles a new character in `universe` can take
    pub async fn roles(&self, universe: &UniverseName) -> Result<Vec<Role>, ServiceError> {
        let manifest = self.api.get_universe(universe.as_str()).await?;
        Ok(manifest.roles.into_iter().map(Role::from).collect())
    }

    /// Create a character from `draft`; returns the backend's confirmation
    pub async fn create(
        &self,
        universe: &UniverseName,
        draft: &CharacterDraft,
    ) -> Result<String, ServiceError> {
        let request = draft.to_request(universe)?;
        let response = self
            .api
            .create_character(universe.as_str(), &request)
            .await?;
        info!(universe = %universe, character = %request.name, "Character created");
        Ok(response.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures::{character_data, eldoria};
    use crate::ports::outbound::{ApiError, MockPersonaApiPort};
    use personaforge_domain::{Emotion, Intensity};
    use personaforge_shared::{MessageResponse, RoleData, UniverseManifestData};

    #[test]
    fn test_default_draft_has_one_empty_slot() {
        let draft = CharacterDraft::new();
        assert_eq!(draft.inventory, vec![String::new()]);
        assert_eq!(draft.mood.label(), "joy (moderate)");
    }

    #[test]
    fn test_inventory_edits_return_new_drafts() {
        let draft = CharacterDraft::new();
        let edited = draft
            .with_inventory_item(0, "herbal pouch")
            .with_inventory_slot()
            .with_inventory_item(1, "amulet");

        assert_eq!(draft.inventory, vec![String::new()]);
        assert_eq!(edited.inventory, vec!["herbal pouch", "amulet"]);
        assert_eq!(edited.without_inventory_slot(0).inventory, vec!["amulet"]);
        assert_eq!(edited.without_inventory_slot(9), edited);
        assert_eq!(edited.with_inventory_item(9, "x"), edited);
    }

    #[test]
    fn test_to_request_filters_blank_items() {
        let draft = CharacterDraft::new()
            .with_name("Aria")
            .with_role("Healer")
            .with_inventory_item(0, "herbal pouch")
            .with_inventory_slot()
            .with_inventory_slot()
            .with_inventory_item(2, "  ")
            .with_mood(
                Mood::new(Emotion::Joy, Intensity::Moderate).with_axis_emotion(Emotion::Trust),
            );

        let request = draft.to_request(&eldoria()).expect("valid draft");
        assert_eq!(request.inventory, vec!["herbal pouch"]);
        assert_eq!(request.universe, "Eldoria");
        assert_eq!(request.current_mood.plutchik_axis, vec!["joy", "trust"]);
    }

    #[test]
    fn test_to_request_requires_name_and_role() {
        assert!(CharacterDraft::new()
            .with_role("Healer")
            .to_request(&eldoria())
            .is_err());
        assert!(CharacterDraft::new()
            .with_name("Aria")
            .to_request(&eldoria())
            .is_err());
    }

    #[test]
    fn test_from_data_rejects_invalid_mood() {
        let err = CharacterDraft::from_data(character_data("Bram", "Blacksmith", "smug"))
            .expect_err("invalid mood");
        assert!(err.is_invalid_mood_value());
    }

    #[tokio::test]
    async fn test_roles_come_from_manifest() {
        let mut api = MockPersonaApiPort::new();
        api.expect_get_universe()
            .withf(|universe| universe == "Eldoria")
            .returning(|_| {
                Ok(UniverseManifestData {
                    universe_name: "Eldoria".into(),
                    description: String::new(),
                    roles: vec![RoleData {
                        name: "Healer".into(),
                        description: "Tends the wounded".into(),
                    }],
                })
            });

        let service = CharacterService::new(Arc::new(api));
        let roles = service.roles(&eldoria()).await.expect("roles");
        assert_eq!(roles, vec![Role::new("Healer", "Tends the wounded")]);
    }

    #[tokio::test]
    async fn test_create_posts_validated_request() {
        let mut api = MockPersonaApiPort::new();
        api.expect_create_character()
            .withf(|universe, request| universe == "Eldoria" && request.name == "Aria")
            .times(1)
            .returning(|_, _| {
                Ok(MessageResponse {
                    message: "Character 'Aria' created".into(),
                })
            });

        let service = CharacterService::new(Arc::new(api));
        let draft = CharacterDraft::new().with_name(" Aria ").with_role("Healer");
        let message = service.create(&eldoria(), &draft).await.expect("created");
        assert_eq!(message, "Character 'Aria' created");
    }

    #[tokio::test]
    async fn test_create_invalid_draft_skips_api() {
        let api = MockPersonaApiPort::new();
        let service = CharacterService::new(Arc::new(api));

        let err = service
            .create(&eldoria(), &CharacterDraft::new())
            .await
            .expect_err("invalid");
        assert!(matches!(err, ServiceError::Domain(_)));
    }

    #[tokio::test]
    async fn test_create_surfaces_backend_detail() {
        let mut api = MockPersonaApiPort::new();
        api.expect_create_character().returning(|_, _| {
            Err(ApiError::HttpError {
                status: 400,
                detail: "Character already exists".into(),
            })
        });

        let service = CharacterService::new(Arc::new(api));
        let draft = CharacterDraft::new().with_name("Aria").with_role("Healer");
        let err = service.create(&eldoria(), &draft).await.expect_err("exists");
        assert_eq!(err.detail(), "Character already exists");
    }
}
