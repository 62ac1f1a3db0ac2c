//! Error type for application services

use personaforge_domain::DomainError;

use crate::ports::outbound::ApiError;

/// Service-level error returned by the management use cases
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ServiceError {
    /// Text suitable for showing to the user
    pub fn detail(&self) -> String {
        match self {
            ServiceError::Api(e) => e.detail(),
            ServiceError::Domain(e) => e.to_string(),
        }
    }
}
