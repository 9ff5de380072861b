//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No se encontró {entity_type} con {key}")]
    NotFound { entity_type: String, key: String },

    #[error("Error de validación: {0}")]
    Validation(String),

    #[error("Error de repositorio: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: i64) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            key: format!("id {}", id),
        }
    }

    pub fn not_found_by_name<T: AsRef<str>>(entity_type: T, name: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            key: format!("nombre '{}'", name),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
