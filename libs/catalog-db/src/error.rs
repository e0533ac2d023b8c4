//! Error taxonomy for repository implementations

use sea_orm::DbErr;

/// Result alias used by every repository trait
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a storage operation
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Lookup by key matched no row
    #[error("{entity} not found: {key}")]
    NotFound {
        /// Entity name (pokemon, club, ...)
        entity: &'static str,
        /// Key that was looked up
        key: String,
    },

    /// Input rejected before it reached the store
    #[error("validation failed: {0}")]
    Validation(String),

    /// The store rejected the statement or was unreachable
    #[error("persistence failure: {0}")]
    Persistence(#[from] DbErr),
}

impl StoreError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// True when the store refused a write because of a unique or foreign key constraint
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Self::Persistence(err) => err.sql_err().is_some(),
            _ => false,
        }
    }

    /// Stable label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Validation(_) => "validation",
            Self::Persistence(_) if self.is_constraint_violation() => "constraint_violation",
            Self::Persistence(_) => "persistence",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinguishable() {
        assert_eq!(StoreError::not_found("club", 7).kind(), "not_found");
        assert_eq!(StoreError::Validation("bad".into()).kind(), "validation");
        let conn = StoreError::from(DbErr::Custom("connection refused".to_string()));
        assert_eq!(conn.kind(), "persistence");
        assert!(!conn.is_constraint_violation());
    }

    #[test]
    fn not_found_message_names_entity_and_key() {
        let err = StoreError::not_found("pokemon", 42);
        assert_eq!(err.to_string(), "pokemon not found: 42");
    }
}
