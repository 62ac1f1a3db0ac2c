//! Universe entity - a named fictional setting with its roles

use serde::{Deserialize, Serialize};

use crate::value_objects::UniverseName;

/// A role characters of a universe can take (e.g. "Healer")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    pub description: String,
}

impl Role {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A universe manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Universe {
    pub name: UniverseName,
    pub description: String,
    pub roles: Vec<Role>,
}

impl Universe {
    pub fn new(name: UniverseName) -> Self {
        Self {
            name,
            description: String::new(),
            roles: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = roles;
        self
    }

    pub fn role(&self, name: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.name == name)
    }
}
