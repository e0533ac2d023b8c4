//! Contract error types for the Pokemon reviews module
//!
//! These errors are transport-agnostic and used for inter-module communication.

use catalog_db::StoreError;

/// Pokemon reviews domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PokemonError {
    /// Pokemon, category or reviewer not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (pokemon, category)
        resource: String,
        /// Resource identifier
        id: String,
    },

    /// Duplicate name or a constraint the store refused
    #[error("Conflict: {reason}")]
    Conflict { reason: String },

    /// Input failed validation
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The store failed the operation
    #[error("Persistence failure: {message}")]
    Persistence { message: String },
}

impl PokemonError {
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<StoreError> for PokemonError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, key } => Self::not_found(entity, key),
            StoreError::Validation(message) => Self::Validation { message },
            e if e.is_constraint_violation() => Self::Conflict {
                reason: e.to_string(),
            },
            e => Self::Persistence {
                message: e.to_string(),
            },
        }
    }
}
