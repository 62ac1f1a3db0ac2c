//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A mood mutation received a value outside the canonical sets
    #[error("Invalid mood value for {field}: '{value}'")]
    InvalidMoodValue { field: &'static str, value: String },

    /// A character name that is not part of the current universe's catalog
    #[error("Unknown character '{name}' in universe '{universe}'")]
    UnknownCharacter { universe: String, name: String },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants or constraints are violated:
    /// - Required fields are empty or missing
    /// - Values are outside allowed ranges
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Character name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid mood value error.
    ///
    /// `field` names the mood component being edited (`primary_emotion`,
    /// `intensity` or `plutchik_axis`).
    pub fn invalid_mood_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidMoodValue {
            field,
            value: value.into(),
        }
    }

    /// Create an unknown character error
    pub fn unknown_character(universe: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownCharacter {
            universe: universe.into(),
            name: name.into(),
        }
    }

    /// Check if this is an invalid mood value error.
    pub fn is_invalid_mood_value(&self) -> bool {
        matches!(self, Self::InvalidMoodValue { .. })
    }
}
