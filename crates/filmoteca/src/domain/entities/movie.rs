//! Movie - A film in the catalog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ensure_name, trim_name};
use crate::domain::errors::DomainError;

/// Movie as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub duration_minutes: Option<i32>,
    pub synopsis: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Movie that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub name: String,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub duration_minutes: Option<i32>,
    pub synopsis: Option<String>,
}

/// Field overrides for a Movie update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieChanges {
    pub name: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub duration_minutes: Option<i32>,
    pub synopsis: Option<String>,
}

impl Movie {
    /// How error messages refer to a Movie
    pub const LABEL: &'static str = "la película";

    pub fn apply(self, changes: MovieChanges) -> Self {
        Self {
            id: self.id,
            name: changes.name.unwrap_or(self.name),
            release_year: changes.release_year.or(self.release_year),
            genre: changes.genre.or(self.genre),
            duration_minutes: changes.duration_minutes.or(self.duration_minutes),
            synopsis: changes.synopsis.or(self.synopsis),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }
}

fn ensure_duration(duration_minutes: Option<i32>) -> Result<(), DomainError> {
    match duration_minutes {
        Some(minutes) if minutes <= 0 => Err(DomainError::Validation(
            "La duración debe ser un número positivo de minutos".to_string(),
        )),
        _ => Ok(()),
    }
}

impl NewMovie {
    /// Trim the name before it is validated or looked up
    pub fn normalized(mut self) -> Self {
        self.name = trim_name(self.name);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_name(&self.name)?;
        ensure_duration(self.duration_minutes)
    }
}

impl MovieChanges {
    pub fn normalized(mut self) -> Self {
        self.name = self.name.map(trim_name);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.name {
            ensure_name(name)?;
        }
        ensure_duration(self.duration_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_duration_is_rejected() {
        let draft = NewMovie {
            name: "Alien".to_string(),
            release_year: Some(1979),
            genre: Some("Sci-Fi".to_string()),
            duration_minutes: Some(0),
            synopsis: None,
        };
        assert!(draft.validate().is_err());

        let changes = MovieChanges {
            duration_minutes: Some(117),
            ..Default::default()
        };
        assert!(changes.validate().is_ok());
    }
}
