//! Director - A film director

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{ensure_name, trim_name};
use crate::domain::errors::DomainError;

/// Director as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Director {
    pub id: i64,
    pub name: String,
    pub nationality: String,
    pub date_of_birth: Option<NaiveDate>,
    pub wikipedia_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Director that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDirector {
    pub name: String,
    pub nationality: String,
    pub date_of_birth: Option<NaiveDate>,
    pub wikipedia_link: Option<String>,
}

/// Field overrides for a Director update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorChanges {
    pub name: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub wikipedia_link: Option<String>,
}

impl Director {
    /// How error messages refer to a Director
    pub const LABEL: &'static str = "el director";

    /// Overlay the provided changes onto this record
    pub fn apply(self, changes: DirectorChanges) -> Self {
        Self {
            id: self.id,
            name: changes.name.unwrap_or(self.name),
            nationality: changes.nationality.unwrap_or(self.nationality),
            date_of_birth: changes.date_of_birth.or(self.date_of_birth),
            wikipedia_link: changes.wikipedia_link.or(self.wikipedia_link),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }
}

impl NewDirector {
    /// Trim the name before it is validated or looked up
    pub fn normalized(mut self) -> Self {
        self.name = trim_name(self.name);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_name(&self.name)
    }
}

impl DirectorChanges {
    pub fn normalized(mut self) -> Self {
        self.name = self.name.map(trim_name);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        match &self.name {
            Some(name) => ensure_name(name),
            None => Ok(()),
        }
    }
}
