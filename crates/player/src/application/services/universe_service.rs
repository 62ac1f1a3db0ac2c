//! Universe Service - listing, creating and indexing universes

use std::sync::Arc;

use tracing::info;

use personaforge_domain::{DomainError, Role, Universe, UniverseName};
use personaforge_shared::{CreateUniverseRequest, RoleData};

use crate::application::ServiceError;
use crate::ports::outbound::PersonaApiPort;

/// Editable universe form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniverseDraft {
    pub universe_name: String,
    pub description: String,
    /// Role rows; rows with a blank name are dropped on submit
    pub roles: Vec<Role>,
}

impl Default for UniverseDraft {
    fn default() -> Self {
        Self {
            universe_name: String::new(),
            description: String::new(),
            roles: vec![Role::new("", "")],
        }
    }
}

impl From<CreateUniverseRequest> for UniverseDraft {
    fn from(request: CreateUniverseRequest) -> Self {
        Self {
            universe_name: request.universe_name,
            description: request.description,
            roles: request.roles.into_iter().map(Role::from).collect(),
        }
    }
}

impl UniverseDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(&self, universe_name: impl Into<String>) -> Self {
        Self {
            universe_name: universe_name.into(),
            ..self.clone()
        }
    }

    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self.clone()
        }
    }

    /// Append an empty role row
    pub fn with_role_slot(&self) -> Self {
        let mut roles = self.roles.clone();
        roles.push(Role::new("", ""));
        Self {
            roles,
            ..self.clone()
        }
    }

    /// Replace role row `index`; out-of-range indexes change nothing
    pub fn with_role(
        &self,
        index: usize,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let mut roles = self.roles.clone();
        if let Some(row) = roles.get_mut(index) {
            *row = Role::new(name, description);
        }
        Self {
            roles,
            ..self.clone()
        }
    }

    pub fn without_role(&self, index: usize) -> Self {
        let mut roles = self.roles.clone();
        if index < roles.len() {
            roles.remove(index);
        }
        Self {
            roles,
            ..self.clone()
        }
    }

    pub fn to_request(&self) -> Result<CreateUniverseRequest, DomainError> {
        let name = UniverseName::new(self.universe_name.as_str())?;
        let roles = self
            .roles
            .iter()
            .filter(|role| !role.name.trim().is_empty())
            .map(|role| RoleData {
                name: role.name.trim().to_string(),
                description: role.description.trim().to_string(),
            })
            .collect();

        Ok(CreateUniverseRequest {
            universe_name: name.to_string(),
            description: self.description.trim().to_string(),
            roles,
        })
    }
}

#[derive(Clone)]
pub struct UniverseService {
    api: Arc<dyn PersonaApiPort>,
}

impl UniverseService {
    pub fn new(api: Arc<dyn PersonaApiPort>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<String>, ServiceError> {
        Ok(self.api.list_universes().await?)
    }

    /// Fetch a universe manifest
    pub async fn get(&self, universe: &UniverseName) -> Result<Universe, ServiceError> {
        let manifest = self.api.get_universe(universe.as_str()).await?;
        let name = UniverseName::new(manifest.universe_name)?;
        Ok(Universe::new(name)
            .with_description(manifest.description)
            .with_roles(manifest.roles.into_iter().map(Role::from).collect()))
    }

    pub async fn create(&self, draft: &UniverseDraft) -> Result<String, ServiceError> {
        let request = draft.to_request()?;
        let response = self.api.create_universe(&request).await?;
        info!(universe = %request.universe_name, roles = request.roles.len(), "Universe created");
        Ok(response.message)
    }

    /// Ask the backend to (re)build the retrieval index of `universe`
    pub async fn build_index(&self, universe: &UniverseName) -> Result<String, ServiceError> {
        let response = self.api.build_index(universe.as_str()).await?;
        info!(universe = %universe, "Index build requested");
        Ok(response.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures::eldoria;
    use crate::ports::outbound::MockPersonaApiPort;
    use personaforge_shared::{MessageResponse, UniverseManifestData};

    #[test]
    fn test_role_rows_are_pure_edits() {
        let draft = UniverseDraft::new();
        let edited = draft
            .with_role(0, "Healer", "Tends the wounded")
            .with_role_slot()
            .with_role(1, "Scout", "");

        assert_eq!(draft.roles, vec![Role::new("", "")]);
        assert_eq!(edited.roles.len(), 2);
        assert_eq!(edited.without_role(0).roles, vec![Role::new("Scout", "")]);
        assert_eq!(edited.without_role(5), edited);
    }

    #[test]
    fn test_to_request_drops_blank_roles() {
        let request = UniverseDraft::new()
            .with_name("Eldoria")
            .with_description("A land of rivers")
            .with_role(0, "Healer", "Tends the wounded")
            .with_role_slot()
            .with_role_slot()
            .with_role(2, "  ", "orphan description")
            .to_request()
            .expect("valid");

        assert_eq!(request.universe_name, "Eldoria");
        assert_eq!(
            request.roles,
            vec![RoleData {
                name: "Healer".into(),
                description: "Tends the wounded".into(),
            }]
        );
    }

    #[test]
    fn test_to_request_requires_name() {
        assert!(UniverseDraft::new().with_name("   ").to_request().is_err());
    }

    #[tokio::test]
    async fn test_get_builds_universe() {
        let mut api = MockPersonaApiPort::new();
        api.expect_get_universe().returning(|_| {
            Ok(UniverseManifestData {
                universe_name: "Eldoria".into(),
                description: "A land of rivers".into(),
                roles: vec![RoleData {
                    name: "Healer".into(),
                    description: String::new(),
                }],
            })
        });

        let service = UniverseService::new(Arc::new(api));
        let universe = service.get(&eldoria()).await.expect("universe");
        assert_eq!(universe.name, eldoria());
        assert!(universe.role("Healer").is_some());
    }

    #[tokio::test]
    async fn test_create_and_build_index() {
        let mut api = MockPersonaApiPort::new();
        api.expect_create_universe()
            .withf(|request| request.universe_name == "Eldoria")
            .times(1)
            .returning(|_| {
                Ok(MessageResponse {
                    message: "Universe 'Eldoria' created".into(),
                })
            });
        api.expect_build_index()
            .withf(|universe| universe == "Eldoria")
            .times(1)
            .returning(|_| {
                Ok(MessageResponse {
                    message: "Index built for Eldoria".into(),
                })
            });

        let service = UniverseService::new(Arc::new(api));
        let created = service
            .create(&UniverseDraft::new().with_name("Eldoria"))
            .await
            .expect("created");
        assert_eq!(created, "Universe 'Eldoria' created");

        let built = service.build_index(&eldoria()).await.expect("built");
        assert_eq!(built, "Index built for Eldoria");
    }
}
