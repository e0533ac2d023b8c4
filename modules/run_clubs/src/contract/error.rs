//! Contract error types for the run clubs module

use catalog_db::StoreError;

/// Run clubs domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClubError {
    /// Club not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type
        resource: String,
        /// Resource identifier
        id: String,
    },

    /// A constraint the store refused
    #[error("Conflict: {reason}")]
    Conflict { reason: String },

    /// Input failed validation
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The store failed the operation
    #[error("Persistence failure: {message}")]
    Persistence { message: String },
}

impl ClubError {
    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound {
            resource: "club".to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<StoreError> for ClubError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, key } => Self::NotFound {
                resource: entity.to_string(),
                id: key,
            },
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
