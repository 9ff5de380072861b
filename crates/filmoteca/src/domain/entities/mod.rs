//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Movie: A film in the catalog
//! - Actor: A performer
//! - Director: A film director
//!
//! Each entity comes with a `New*` draft (not yet persisted, no id) and a
//! `*Changes` set of optional field overrides used by updates.

mod actor;
mod director;
mod movie;

pub use actor::*;
pub use director::*;
pub use movie::*;

use crate::domain::errors::DomainError;

/// Strip surrounding whitespace so lookups and uniqueness compare the same text
pub(crate) fn trim_name(name: String) -> String {
    let trimmed = name.trim();
    if trimmed.len() == name.len() {
        name
    } else {
        trimmed.to_string()
    }
}

/// Reject names that are empty once surrounding whitespace is removed
pub(crate) fn ensure_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation(
            "El nombre no puede estar vacío".to_string(),
        ));
    }
    Ok(())
}
